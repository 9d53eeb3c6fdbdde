//! Hybrid timestamp module
//!
//! This module provides the [`Timestamp`] issued by the hybrid logical clock:
//! a nanosecond wall-time component paired with a logical counter.

use core::cmp::Ordering;
use core::fmt;

use crate::codec;
use crate::error::{ClockError, ClockResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hybrid logical timestamp
///
/// Combines a wall-time reading (nanoseconds since an epoch) with a logical
/// counter that breaks ties between timestamps sharing the same wall time.
///
/// # Ordering
///
/// Timestamps are totally ordered by `(wall_time, logical)`. This is the same
/// order the clock uses when merging, so a timestamp returned from
/// [`HybridLogicalClock::update`](crate::clock::HybridLogicalClock::update)
/// always compares greater than everything the clock has seen before.
///
/// # Memory Layout
///
/// | Field | Width | Encoded offset |
/// |-------|-------|----------------|
/// | `wall_time` | 64 bit | 0 |
/// | `logical` | 32 bit | 8 |
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
///
/// let a = Timestamp::new(0, 1);
/// let b = Timestamp::new(1, 0);
/// assert!(a < b);
/// assert_eq!(Timestamp::bigger(a, b), b);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timestamp {
    wall_time: u64,
    logical: u32,
}

impl Timestamp {
    /// The smallest representable timestamp
    pub const MIN: Self = Self::new(0, 0);

    /// The largest representable timestamp
    pub const MAX: Self = Self::new(u64::MAX, u32::MAX);

    /// Creates a new timestamp
    pub const fn new(wall_time: u64, logical: u32) -> Self {
        Self { wall_time, logical }
    }

    /// Creates a timestamp with a zero logical counter
    pub const fn from_wall_time(wall_time: u64) -> Self {
        Self::new(wall_time, 0)
    }

    /// Returns the wall-time component in nanoseconds
    pub const fn wall_time(&self) -> u64 {
        self.wall_time
    }

    /// Returns the logical counter
    pub const fn logical(&self) -> u32 {
        self.logical
    }

    /// Compares by wall time first, then by the logical counter
    pub const fn compare(&self, other: &Self) -> Ordering {
        if self.wall_time > other.wall_time {
            return Ordering::Greater;
        }
        if self.wall_time < other.wall_time {
            return Ordering::Less;
        }
        if self.logical > other.logical {
            return Ordering::Greater;
        }
        if self.logical < other.logical {
            return Ordering::Less;
        }
        Ordering::Equal
    }

    /// Like [`compare`](Self::compare), as `-1`, `0` or `1`
    pub const fn compare_sign(&self, other: &Self) -> i8 {
        self.compare(other) as i8
    }

    /// Returns the greater of two timestamps
    ///
    /// When both compare equal the second argument is returned.
    pub const fn bigger(a: Self, b: Self) -> Self {
        match a.compare(&b) {
            Ordering::Greater => a,
            Ordering::Less | Ordering::Equal => b,
        }
    }

    /// Encodes into a fresh 12-byte buffer
    ///
    /// Shorthand for [`codec::encode`].
    pub fn encode(&self) -> [u8; codec::ENCODED_LEN] {
        codec::encode(self)
    }

    /// Encodes into `target` starting at `offset`
    ///
    /// Shorthand for [`codec::encode_into`].
    pub fn encode_into(&self, target: &mut [u8], offset: usize) -> ClockResult<()> {
        codec::encode_into(self, target, offset)
    }

    /// Decodes a timestamp from `bytes` starting at `offset`
    ///
    /// Shorthand for [`codec::decode`].
    pub fn decode(bytes: &[u8], offset: usize) -> ClockResult<Self> {
        codec::decode(bytes, offset)
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl From<u64> for Timestamp {
    fn from(wall_time: u64) -> Self {
        Self::from_wall_time(wall_time)
    }
}

impl From<(u64, u32)> for Timestamp {
    fn from((wall_time, logical): (u64, u32)) -> Self {
        Self::new(wall_time, logical)
    }
}

impl From<Timestamp> for (u64, u32) {
    fn from(timestamp: Timestamp) -> Self {
        (timestamp.wall_time, timestamp.logical)
    }
}

impl TryFrom<u128> for Timestamp {
    type Error = ClockError;

    fn try_from(wall_time: u128) -> ClockResult<Self> {
        u64::try_from(wall_time)
            .map(Self::from_wall_time)
            .map_err(|_| ClockError::WallTimeOverflow {
                time: wall_time,
                max_time: u64::MAX,
            })
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = ClockError;

    /// Negative wall times lie below the representable range and are rejected
    /// with `max_time = 0` naming the violated lower edge.
    fn try_from(wall_time: i64) -> ClockResult<Self> {
        u64::try_from(wall_time)
            .map(Self::from_wall_time)
            .map_err(|_| ClockError::WallTimeOverflow {
                time: wall_time.unsigned_abs() as u128,
                max_time: 0,
            })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.wall_time, self.logical)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Timestamp", 2)?;
        state.serialize_field("wallTime", &crate::serde_int::SafeInt(self.wall_time))?;
        state.serialize_field("logical", &self.logical)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, SeqAccess, Visitor};

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "camelCase")]
        enum Field {
            WallTime,
            Logical,
        }

        struct TimestampVisitor;

        impl<'de> Visitor<'de> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Timestamp")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Timestamp, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let wall_time: crate::serde_int::SafeInt = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let logical = seq.next_element::<u32>()?.unwrap_or(0);
                Ok(Timestamp::new(wall_time.0, logical))
            }

            fn visit_map<V>(self, mut map: V) -> Result<Timestamp, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut wall_time = None;
                let mut logical = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::WallTime => {
                            if wall_time.is_some() {
                                return Err(de::Error::duplicate_field("wallTime"));
                            }
                            wall_time = Some(map.next_value::<crate::serde_int::SafeInt>()?);
                        }
                        Field::Logical => {
                            if logical.is_some() {
                                return Err(de::Error::duplicate_field("logical"));
                            }
                            logical = Some(map.next_value::<u32>()?);
                        }
                    }
                }

                let wall_time = wall_time.ok_or_else(|| de::Error::missing_field("wallTime"))?;
                // A missing counter means a plain wall-time reading
                Ok(Timestamp::new(wall_time.0, logical.unwrap_or(0)))
            }
        }

        const FIELDS: &[&str] = &["wallTime", "logical"];
        deserializer.deserialize_struct("Timestamp", FIELDS, TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_comparison_total_order() {
        let a = Timestamp::new(0, 0);
        let b = Timestamp::new(0, 1);
        let c = Timestamp::new(1, 1);

        assert_eq!(a.compare_sign(&a), 0);
        assert_eq!(a.compare_sign(&b), -1);
        assert_eq!(a.compare_sign(&c), -1);
        assert_eq!(b.compare_sign(&a), 1);
        assert_eq!(b.compare_sign(&b), 0);
        assert_eq!(b.compare_sign(&c), -1);
        assert_eq!(c.compare_sign(&a), 1);
        assert_eq!(c.compare_sign(&b), 1);
        assert_eq!(c.compare_sign(&c), 0);

        assert!(a < b && b < c);
        assert_eq!(a.compare(&c), Ordering::Less);
    }

    #[test]
    fn test_bigger() {
        let a = Timestamp::new(0, 0);
        let b = Timestamp::new(0, 1);
        let c = Timestamp::new(1, 1);

        assert_eq!(Timestamp::bigger(a, a), a);
        assert_eq!(Timestamp::bigger(a, b), b);
        assert_eq!(Timestamp::bigger(a, c), c);
        assert_eq!(Timestamp::bigger(b, a), b);
        assert_eq!(Timestamp::bigger(b, b), b);
        assert_eq!(Timestamp::bigger(b, c), c);
        assert_eq!(Timestamp::bigger(c, a), c);
        assert_eq!(Timestamp::bigger(c, b), c);
        assert_eq!(Timestamp::bigger(c, c), c);
    }

    #[test]
    fn test_logical_breaks_wall_time_ties_only() {
        // A large counter never outweighs a later wall time
        assert!(Timestamp::new(5, u32::MAX) < Timestamp::new(6, 0));
        assert!(Timestamp::MIN < Timestamp::MAX);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Timestamp::from(7u64), Timestamp::new(7, 0));
        assert_eq!(Timestamp::from((7u64, 3u32)), Timestamp::new(7, 3));
        assert_eq!(<(u64, u32)>::from(Timestamp::new(7, 3)), (7, 3));

        assert_eq!(
            Timestamp::try_from(u64::MAX as u128),
            Ok(Timestamp::from_wall_time(u64::MAX))
        );
        assert_eq!(
            Timestamp::try_from(u64::MAX as u128 + 1),
            Err(ClockError::WallTimeOverflow {
                time: u64::MAX as u128 + 1,
                max_time: u64::MAX,
            })
        );
        assert_eq!(Timestamp::try_from(42i64), Ok(Timestamp::new(42, 0)));
        assert!(Timestamp::try_from(-1i64).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Timestamp::new(20, 2).to_string(), "20.2");
    }
}
