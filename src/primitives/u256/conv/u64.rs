//! Conversions between `U256` and 64-bit integer representations

use crate::primitives::u256::error::TryFromU256Error;
use crate::primitives::U256;

/// Splits a `u64` into `[low, high]` 32-bit words.
fn split(value: u64) -> [u32; 2] {
    [value as u32, (value >> 32) as u32]
}

/// Joins `[low, high]` 32-bit words into a `u64`.
fn join(low: u32, high: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}

/// Converts a `U256` into four 64-bit limbs, least significant first.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        let mut out = [0u64; 4];

        for (o, pair) in out.iter_mut().zip(value.0.chunks_exact(2)) {
            *o = join(pair[0], pair[1]);
        }

        out
    }
}

/// Converts four 64-bit limbs, least significant first, into a `U256`.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        let mut out = [0u32; 8];

        for (pair, limb) in out.chunks_exact_mut(2).zip(value) {
            pair.copy_from_slice(&split(limb));
        }

        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = TryFromU256Error;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        value.ensure_fits_in_words(2)?;

        Ok(join(value.0[0], value.0[1]))
    }
}

/// Places a `u64` in the least significant 64 bits.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from([value, 0, 0, 0])
    }
}
