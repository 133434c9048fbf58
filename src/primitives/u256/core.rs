//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`).
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Every operation takes its operands by
//! value and returns a freshly built result; nothing is mutated in place.
//!
//! The internal representation is eight 32-bit words in little-word-endian
//! order, which keeps carry propagation a plain forward loop.

use std::cmp::Ordering;

use crate::primitives::u256::error::{TryFromU256Error, WordIndexError};

/// Number of 32-bit words in a `U256`.
pub(crate) const WORDS: usize = 8;

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as eight `u32` words, **least significant first**:
/// word 0 holds bits 0–31 and word 7 holds bits 224–255.
///
/// Equality is word-wise. Ordering is numeric.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u32; WORDS]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u32; WORDS]);

    /// The value one.
    pub const ONE: Self = Self::from_u32(1);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u32::MAX; WORDS]);

    /// Creates a value from a single 32-bit word.
    ///
    /// `value` becomes word 0; words 1 through 7 are zero.
    pub const fn from_u32(value: u32) -> Self {
        let mut out = [0u32; WORDS];
        out[0] = value;
        U256(out)
    }

    /// Creates a value from eight 32-bit words.
    ///
    /// `words[0]` is the least significant word, `words[7]` the most
    /// significant one.
    pub const fn from_words(words: [u32; WORDS]) -> Self {
        U256(words)
    }

    /// Returns a copy of the eight words, least significant first.
    pub const fn words(self) -> [u32; WORDS] {
        self.0
    }

    /// Returns the word at `index`, where index 0 is the least significant.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..8`. Use [`U256::checked_word`] when
    /// the index comes from untrusted input.
    pub fn word(self, index: usize) -> u32 {
        match self.checked_word(index) {
            Ok(word) => word,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the word at `index`, or an error if `index` is not in `0..8`.
    pub fn checked_word(self, index: usize) -> Result<u32, WordIndexError> {
        self.0
            .get(index)
            .copied()
            .ok_or(WordIndexError { index })
    }

    /// Returns `true` if every word is zero.
    pub fn is_zero(self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// Scans from the most significant word and returns the number of
    /// zero bits before the first one bit, in the range `0..=256`.
    pub fn leading_zeros(self) -> u32 {
        let mut count = 0u32;

        for &word in self.0.iter().rev() {
            if word == 0 {
                count += u32::BITS;
            } else {
                count += word.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Returns an error unless every word from `words` upward is zero.
    pub(crate) fn ensure_fits_in_words(self, words: usize) -> Result<(), TryFromU256Error> {
        if self.0[words..].iter().any(|&w| w != 0) {
            return Err(TryFromU256Error {
                bits: words as u32 * u32::BITS,
            });
        }

        Ok(())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    /// Compares numerically, starting from the most significant word.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}
