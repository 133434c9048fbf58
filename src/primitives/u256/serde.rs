//! `serde` support for `U256`, enabled by the `serde` feature.
//!
//! Values travel as their minimal lowercase hex string, the same text
//! [`U256::to_hex`] produces. Deserialization goes through
//! [`U256::from_hex`], so malformed text is rejected with its parse error.

use std::fmt::{self, Formatter};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::primitives::U256;

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = U256;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a string of at most 64 significant hex digits")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        U256::from_hex(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor)
    }
}
