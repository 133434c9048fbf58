//! Hexadecimal text conversion for `U256`
//!
//! The text form is a bare string of hex digits, most significant digit
//! first, with no sign and no `0x` prefix. Parsing is case-insensitive;
//! rendering is minimal (no leading zeros, zero renders as `"0"`).

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

use tracing::debug;

use crate::primitives::u256::core::{U256, WORDS};
use crate::primitives::u256::error::{MAX_HEX_DIGITS, ParseHexError};

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Hex digits packed into one 32-bit word.
const DIGITS_PER_WORD: usize = 8;

impl U256 {
    /// Parses a string of hexadecimal digits into a `U256`.
    ///
    /// The string is read from its last character backward in groups of
    /// eight digits, each group filling one word from least to most
    /// significant. The final group holds the string's leading digits and
    /// may be shorter than eight.
    ///
    /// Leading zeros are accepted in any number; an empty string is zero.
    ///
    /// # Errors
    /// - [`ParseHexError::InvalidDigit`] if any character is not a hex digit.
    /// - [`ParseHexError::TooManyDigits`] if more than 64 significant digits
    ///   remain once leading zeros are stripped.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        if let Some((index, digit)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            debug!(len = hex.len(), index, "rejecting hex input: invalid digit");
            return Err(ParseHexError::InvalidDigit { digit, index });
        }

        let significant = hex.trim_start_matches('0');
        if significant.len() > MAX_HEX_DIGITS {
            debug!(len = hex.len(), significant = significant.len(), "rejecting hex input: too many digits");
            return Err(ParseHexError::TooManyDigits {
                significant: significant.len(),
            });
        }

        let mut out = [0u32; WORDS];

        for (word, group) in out
            .iter_mut()
            .zip(significant.as_bytes().rchunks(DIGITS_PER_WORD))
        {
            *word = group
                .iter()
                .fold(0u32, |acc, &digit| (acc << 4) | nibble_value(digit));
        }

        Ok(U256(out))
    }

    /// Renders the value as minimal lowercase hexadecimal.
    ///
    /// Zero renders as `"0"`; any other value has no leading zeros. The
    /// result always parses back to the same value with [`U256::from_hex`].
    pub fn to_hex(self) -> String {
        self.hex_digits(LOWER)
    }

    fn hex_digits(self, alphabet: &[u8; 16]) -> String {
        let significant = (256 - self.leading_zeros() as usize).div_ceil(4).max(1);

        (0..significant)
            .rev()
            .map(|i| char::from(alphabet[self.nibble(i) as usize]))
            .collect()
    }

    /// Returns the 4-bit digit at position `i`, where 0 is least significant.
    fn nibble(self, i: usize) -> u32 {
        let word = self.0[i / DIGITS_PER_WORD];
        (word >> (4 * (i % DIGITS_PER_WORD))) & 0xF
    }
}

/// Numeric value of an ASCII hex digit.
///
/// Callers validate the input first; anything else maps to zero.
fn nibble_value(digit: u8) -> u32 {
    match digit {
        b'0'..=b'9' => (digit - b'0') as u32,
        b'a'..=b'f' => (digit - b'a' + 10) as u32,
        b'A'..=b'F' => (digit - b'A' + 10) as u32,
        _ => 0,
    }
}

impl FromStr for U256 {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_hex(s)
    }
}

impl Display for U256 {
    /// Formats the value as minimal lowercase hexadecimal, like
    /// [`U256::to_hex`]. Width and fill flags are honored.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_hex())
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(LOWER))
    }
}

impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(UPPER))
    }
}
