//! Arithmetic and bitwise operations for `U256`
//!
//! Addition is the single arithmetic primitive: negation is complement plus
//! one, and subtraction is addition of the negation. All arithmetic wraps
//! modulo 2²⁵⁶; overflow and underflow are defined behavior, never errors.
//!
//! The operator traits (`+`, `-`, unary `-`, `!`, `&`, `|`, `^`) all use
//! the wrapping forms.

use std::ops::{Add, AddAssign, BitAnd, BitOr, BitXor, Neg, Not, Sub, SubAssign};

use crate::primitives::u256::core::{U256, WORDS};

impl U256 {
    /// Adds two values and reports whether the sum wrapped past 2²⁵⁶.
    ///
    /// Words are added from least to most significant. Each position sums
    /// both words and the incoming carry in 64 bits, keeps the low 32 bits
    /// and forwards bit 32 as the next carry.
    pub fn overflowing_add(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u32; WORDS];
        let mut carry = 0u64;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let sum = a as u64 + b as u64 + carry;
            *o = sum as u32;
            carry = sum >> 32;
        }

        (U256(out), carry != 0)
    }

    /// Addition modulo 2²⁵⁶. The carry out of the top word is discarded.
    pub fn wrapping_add(self, rhs: U256) -> U256 {
        self.overflowing_add(rhs).0
    }

    /// Addition, or `None` if the sum does not fit in 256 bits.
    pub fn checked_add(self, rhs: U256) -> Option<U256> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Two's-complement negation: `2²⁵⁶ − self`, and zero for zero.
    pub fn wrapping_neg(self) -> U256 {
        (!self).wrapping_add(U256::ONE)
    }

    /// Subtraction modulo 2²⁵⁶, computed as `self + (-rhs)`.
    ///
    /// Underflow wraps: `0 − 1` is [`U256::MAX`].
    pub fn wrapping_sub(self, rhs: U256) -> U256 {
        self.wrapping_add(rhs.wrapping_neg())
    }

    /// Subtraction, or `None` if `rhs` is greater than `self`.
    pub fn checked_sub(self, rhs: U256) -> Option<U256> {
        if rhs > self {
            return None;
        }

        Some(self.wrapping_sub(rhs))
    }

    fn zip_words(self, rhs: U256, f: impl Fn(u32, u32) -> u32) -> U256 {
        let mut out = [0u32; WORDS];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (&l, &r))| *o = f(l, r));

        U256(out)
    }
}

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U256 {
    fn add_assign(&mut self, rhs: U256) {
        *self = self.wrapping_add(rhs);
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U256 {
    fn sub_assign(&mut self, rhs: U256) {
        *self = self.wrapping_sub(rhs);
    }
}

/// Two's-complement negation modulo 2²⁵⁶.
impl Neg for U256 {
    type Output = U256;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

/// Bitwise complement of every word.
impl Not for U256 {
    type Output = U256;

    fn not(self) -> Self::Output {
        U256(self.0.map(|w| !w))
    }
}

impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        self.zip_words(rhs, |l, r| l & r)
    }
}

impl BitOr for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        self.zip_words(rhs, |l, r| l | r)
    }
}

impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        self.zip_words(rhs, |l, r| l ^ r)
    }
}
