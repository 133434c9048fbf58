//! Circular bit rotation for `U256`
//!
//! The 256 bits form a ring: bit 0 is the least significant bit of word 0
//! and bit 255 the most significant bit of word 7. A rotation amount is
//! reduced modulo 256 and split into a whole-word part and a sub-word bit
//! part.

use crate::primitives::u256::core::{U256, WORDS};

const BITS: u32 = 256;

impl U256 {
    /// Rotates every bit `n` positions toward the most significant end.
    ///
    /// Bits shifted past bit 255 re-enter at bit 0. Only `n % 256` matters.
    pub fn rotate_left(self, n: u32) -> U256 {
        let (word_shift, bit_shift) = split_shift(n);
        let mut out = [0u32; WORDS];

        for (i, o) in out.iter_mut().enumerate() {
            let base = self.0[(i + WORDS - word_shift) % WORDS];
            let below = self.0[(i + WORDS - word_shift - 1) % WORDS];

            *o = if bit_shift == 0 {
                base
            } else {
                (base << bit_shift) | (below >> (u32::BITS - bit_shift))
            };
        }

        U256(out)
    }

    /// Rotates every bit `n` positions toward the least significant end.
    ///
    /// Bits shifted past bit 0 re-enter at bit 255. Only `n % 256` matters.
    pub fn rotate_right(self, n: u32) -> U256 {
        let (word_shift, bit_shift) = split_shift(n);
        let mut out = [0u32; WORDS];

        for (i, o) in out.iter_mut().enumerate() {
            let base = self.0[(i + word_shift) % WORDS];
            let above = self.0[(i + word_shift + 1) % WORDS];

            *o = if bit_shift == 0 {
                base
            } else {
                (base >> bit_shift) | (above << (u32::BITS - bit_shift))
            };
        }

        U256(out)
    }
}

/// Splits a rotation amount into `(whole words, remaining bits)`.
///
/// Word shift is in `0..8`, bit shift in `0..32`.
fn split_shift(n: u32) -> (usize, u32) {
    let n = n % BITS;
    ((n / u32::BITS) as usize, n % u32::BITS)
}
