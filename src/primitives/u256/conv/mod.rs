//! Integer and byte conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U256` primitive and native integer types, word arrays and
//! raw bytes.
//!
//! Each submodule is responsible for conversions to and from a specific
//! width, following these principles:
//! - word and limb arrays are ordered least significant first
//! - no implicit truncation
//! - fallible conversions when narrowing may lose information

mod u128;
mod u32;
mod u64;
mod u8;
