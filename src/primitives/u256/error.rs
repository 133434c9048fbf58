//! Error types for `U256` parsing, word access and narrowing conversions.

use thiserror::Error;

/// Maximum number of significant hexadecimal digits in a `U256`.
pub(crate) const MAX_HEX_DIGITS: usize = 64;

/// Errors returned when parsing a `U256` from hexadecimal text.
///
/// No partial value is ever produced: parsing either yields the exact value
/// or one of these errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// The input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {digit:?} at byte offset {index}")]
    InvalidDigit { digit: char, index: usize },

    /// More than 64 digits remain after stripping leading zeros.
    #[error("hex value has {significant} significant digits, at most 64 fit in 256 bits")]
    TooManyDigits { significant: usize },
}

/// A word index outside `0..8` was passed to a word accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("word index {index} out of range, a U256 has 8 words")]
pub struct WordIndexError {
    pub index: usize,
}

/// A `U256` did not fit into the requested native integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value does not fit in a {bits}-bit integer")]
pub struct TryFromU256Error {
    pub bits: u32,
}
