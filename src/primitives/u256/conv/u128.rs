//! Conversions between `U256` and 128-bit integers

use crate::primitives::u256::error::TryFromU256Error;
use crate::primitives::U256;

/// Attempts to convert a `U256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the value are zero.
impl TryFrom<U256> for u128 {
    type Error = TryFromU256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        value.ensure_fits_in_words(4)?;

        Ok(value.0[..4]
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | w as u128))
    }
}

/// Places a `u128` in the least significant 128 bits.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256::from([value as u64, (value >> 64) as u64, 0, 0])
    }
}
