//! Core error types for hlcsphere
//!
//! This module defines the error type shared by the clock and the codec.

use core::fmt;

const NANOS_PER_MILLI: u128 = 1_000_000;

/// Main error type for clock and codec operations
///
/// Each variant carries the measured quantity together with the bound it
/// violated, so callers can log or react programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// A merged timestamp is further ahead of the local wall clock than `max_offset` allows
    ClockOffset {
        /// How far the timestamp is ahead of the wall clock, in nanoseconds
        offset: u64,
        /// Configured maximum offset, in nanoseconds
        max_offset: u64,
    },
    /// The local wall clock advanced past the last known timestamp by more than the tolerance
    ForwardJump {
        /// Size of the detected jump, in nanoseconds
        timejump: u64,
        /// Configured tolerated forward jump, in nanoseconds
        tolerance: u64,
    },
    /// The computed wall time exceeds the effective upper bound
    WallTimeOverflow {
        /// The wall time that would have been issued
        ///
        /// Wider than `u64` since a logical rollover at `u64::MAX` yields `u64::MAX + 1`.
        time: u128,
        /// The effective upper bound
        max_time: u64,
    },
    /// A buffer cannot hold (or does not contain) a full encoded timestamp
    BufferTooSmall {
        /// Bytes required from the requested offset
        required: usize,
        /// Bytes available from the requested offset
        available: usize,
    },
}

impl ClockError {
    /// Returns true if the error comes from drift validation
    pub const fn is_drift_error(&self) -> bool {
        matches!(self, Self::ClockOffset { .. } | Self::ForwardJump { .. })
    }

    /// Returns true if retrying later can reasonably succeed
    ///
    /// A forward jump clears once the clock has been re-synchronized and an
    /// offset violation clears once the local wall clock catches up. Overflow
    /// and buffer errors do not go away by waiting.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::ClockOffset { .. } | Self::ForwardJump { .. } => true,
            Self::WallTimeOverflow { .. } | Self::BufferTooSmall { .. } => false,
        }
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ClockOffset { .. } | Self::ForwardJump { .. } => "Drift",
            Self::WallTimeOverflow { .. } => "Overflow",
            Self::BufferTooSmall { .. } => "Codec",
        }
    }

    /// Returns the stable name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ClockOffset { .. } => "ClockOffsetError",
            Self::ForwardJump { .. } => "ForwardJumpError",
            Self::WallTimeOverflow { .. } => "WallTimeOverflowError",
            Self::BufferTooSmall { .. } => "BufferTooSmallError",
        }
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ClockOffset { offset, max_offset } => write!(
                f,
                "the received time is {}ms ahead of the wall time, exceeding the max offset of {}ms",
                offset as u128 / NANOS_PER_MILLI,
                max_offset as u128 / NANOS_PER_MILLI
            ),
            Self::ForwardJump {
                timejump,
                tolerance,
            } => write!(
                f,
                "detected a forward time jump of {}ms, exceeding the tolerance of {}ms",
                timejump as u128 / NANOS_PER_MILLI,
                tolerance as u128 / NANOS_PER_MILLI
            ),
            Self::WallTimeOverflow { time, max_time } => write!(
                f,
                "the wall time {}ms exceeds the max time of {}ms",
                time / NANOS_PER_MILLI,
                max_time as u128 / NANOS_PER_MILLI
            ),
            Self::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "buffer too small: {required} bytes required but only {available} available"
            ),
        }
    }
}

impl core::error::Error for ClockError {}

/// Result type for clock and codec operations
pub type ClockResult<T> = Result<T, ClockError>;
