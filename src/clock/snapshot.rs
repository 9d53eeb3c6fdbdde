use crate::clock::ClockConfig;
use crate::timestamp::Timestamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Serializable state of a clock
///
/// Holds the drift configuration and the last issued timestamp, which is
/// everything needed to resume a clock after a restart. Persisting it is up
/// to the caller.
///
/// With the `serde` feature the snapshot uses camel-cased field names, and
/// every `u64` is written as a plain number when a double holds it exactly and
/// as a `0x` hex string otherwise:
///
/// ```json
/// {"maxOffset":3,"wallTimeUpperBound":"0x20000000000000","toleratedForwardClockJump":4,"last":{"wallTime":1,"logical":0}}
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClockSnapshot {
    /// See [`ClockConfig::max_offset`]
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_int", default))]
    pub max_offset: u64,
    /// See [`ClockConfig::wall_time_upper_bound`]
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_int", default))]
    pub wall_time_upper_bound: u64,
    /// See [`ClockConfig::tolerated_forward_clock_jump`]
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_int", default))]
    pub tolerated_forward_clock_jump: u64,
    /// Last timestamp issued or merged by the clock
    pub last: Timestamp,
}

impl ClockSnapshot {
    /// Creates a snapshot from a configuration and a timestamp
    pub const fn new(config: ClockConfig, last: Timestamp) -> Self {
        Self {
            max_offset: config.max_offset,
            wall_time_upper_bound: config.wall_time_upper_bound,
            tolerated_forward_clock_jump: config.tolerated_forward_clock_jump,
            last,
        }
    }

    /// Returns the drift configuration held by the snapshot
    pub const fn config(&self) -> ClockConfig {
        ClockConfig {
            max_offset: self.max_offset,
            wall_time_upper_bound: self.wall_time_upper_bound,
            tolerated_forward_clock_jump: self.tolerated_forward_clock_jump,
        }
    }
}

impl From<ClockSnapshot> for ClockConfig {
    fn from(snapshot: ClockSnapshot) -> Self {
        snapshot.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = ClockConfig::new()
            .with_max_offset(1)
            .with_wall_time_upper_bound(2)
            .with_tolerated_forward_clock_jump(3);
        let snapshot = ClockSnapshot::new(config, Timestamp::new(4, 5));

        assert_eq!(ClockConfig::from(snapshot), config);
        assert_eq!(snapshot.last, Timestamp::new(4, 5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let config = ClockConfig::new()
            .with_max_offset(3)
            .with_tolerated_forward_clock_jump(4)
            .with_wall_time_upper_bound(1 << 53);
        let snapshot = ClockSnapshot::new(config, Timestamp::from_wall_time(1));

        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "maxOffset": 3,
                "wallTimeUpperBound": "0x20000000000000",
                "toleratedForwardClockJump": 4,
                "last": { "wallTime": 1, "logical": 0 }
            })
        );

        let restored: ClockSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_missing_bounds_default_to_disabled() {
        let restored: ClockSnapshot =
            serde_json::from_str(r#"{"last":{"wallTime":"0xff"}}"#).unwrap();
        assert_eq!(restored.config(), ClockConfig::new());
        assert_eq!(restored.last, Timestamp::from_wall_time(255));
    }
}
