//! Conversions between `U256` and byte representations
//!
//! Byte order is explicit in every method name: callers assembling values
//! from raw bytes pick big-endian (conventional for hashes and wire
//! formats) or little-endian.

use crate::primitives::U256;

impl U256 {
    /// Interprets 32 bytes as a big-endian 256-bit value.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().rev().zip(bytes.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256(out)
    }

    /// Interprets 32 bytes as a little-endian 256-bit value.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
            *o = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256(out)
    }

    /// Returns the value as 32 big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, w) in out.chunks_exact_mut(4).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&w.to_be_bytes());
        }

        out
    }

    /// Returns the value as 32 little-endian bytes.
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, w) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }

        out
    }
}

/// Places a `u8` in the least significant byte.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256::from_u32(value as u32)
    }
}
