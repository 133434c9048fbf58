//! Conversions between `U256` and 32-bit integer representations
//!
//! The eight-word array is the interchange format of `U256`: it is the
//! exact internal layout, least significant word first.

use crate::primitives::u256::error::TryFromU256Error;
use crate::primitives::U256;

/// Converts a `U256` into eight 32-bit words, least significant first.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts eight 32-bit words, least significant first, into a `U256`.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        U256::from_words(value)
    }
}

/// Attempts to convert a `U256` into a `u32`.
///
/// The conversion succeeds only if the upper 224 bits of the value are zero.
impl TryFrom<U256> for u32 {
    type Error = TryFromU256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        value.ensure_fits_in_words(1)?;

        Ok(value.0[0])
    }
}

/// Places a `u32` in word 0; all higher words are zero.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        U256::from_u32(value)
    }
}
