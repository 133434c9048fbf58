//! Fixed-width 256-bit unsigned integer arithmetic
//!
//! This crate provides `U256`, a small value type for unsigned integers in
//! the range `[0, 2²⁵⁶ − 1]`, together with the handful of operations it
//! needs to be useful as a building block: construction, word access,
//! hexadecimal text conversion, wrapping addition, subtraction and
//! two's-complement negation, and circular bit rotation.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a full big-integer library.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `U256` type, its error types, and all operations on it.
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic (only formatting allocates)
//! - Wraparound semantics: arithmetic never fails
//! - Explicit, fallible parsing and narrowing conversions
//!
//! # Features
//!
//! - `serde`: (de)serialization of `U256` as a minimal lowercase hex string.

pub mod primitives;

pub use primitives::{ParseHexError, TryFromU256Error, U256, WordIndexError};
