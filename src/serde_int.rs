//! Number-or-hex encoding of `u64` fields
//!
//! JSON consumers commonly parse numbers as IEEE doubles, which only hold
//! integers below 2^53 exactly. Values below [`MAX_SAFE_INTEGER`] are written
//! as plain numbers, everything else as a `0x`-prefixed lowercase hex string.
//! Both forms, and decimal strings, are accepted when reading.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serialize, Serializer};

/// Largest integer a double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// `u64` wrapper using the number-or-hex representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeInt(pub u64);

impl Serialize for SafeInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for SafeInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(SafeInt)
    }
}

/// Serializes a `u64` as a number when safe, else as a hex string
///
/// Usable with `#[serde(serialize_with = "...")]`.
pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *value < MAX_SAFE_INTEGER {
        serializer.serialize_u64(*value)
    } else {
        serializer.collect_str(&format_args!("0x{value:x}"))
    }
}

/// Deserializes a `u64` from a number, a `0x` hex string or a decimal string
///
/// Usable with `#[serde(deserialize_with = "...")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SafeIntVisitor)
}

struct SafeIntVisitor;

impl Visitor<'_> for SafeIntVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned 64-bit integer or a hex string")
    }

    fn visit_u64<E>(self, value: u64) -> Result<u64, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<u64, E>
    where
        E: de::Error,
    {
        u64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_f64<E>(self, value: f64) -> Result<u64, E>
    where
        E: de::Error,
    {
        // Only integral doubles inside the exact range are accepted
        if value >= 0.0 && value <= MAX_SAFE_INTEGER as f64 && value == (value as u64) as f64 {
            Ok(value as u64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<u64, E>
    where
        E: de::Error,
    {
        let parsed = match value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => value.parse::<u64>(),
        };
        parsed.map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}
