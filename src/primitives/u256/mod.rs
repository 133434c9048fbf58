//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer stored as eight 32-bit words.
//!
//! `U256` is designed as a low-level primitive rather than a full
//! big-integer abstraction. It provides construction, hexadecimal
//! conversion, wrapping addition/subtraction/negation and circular
//! rotation, with explicit semantics and predictable behavior.
//!
//! The internal representation is little-word-endian: word 0 holds the
//! least significant 32 bits, word 7 the most significant.

mod conv;
mod core;
mod error;
mod hex;
mod ops;
mod rotate;
#[cfg(feature = "serde")]
mod serde;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
pub use self::error::{ParseHexError, TryFromU256Error, WordIndexError};
