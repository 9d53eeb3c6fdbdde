//! Offset validation policy trait
//!
//! This module defines the hook the clock invokes during every merge to
//! decide whether the observed offset is acceptable.

use crate::clock::ClockConfig;
use crate::error::{ClockError, ClockResult};

/// Policy deciding whether a clock offset is acceptable
///
/// The clock calls [`validate_offset`](Self::validate_offset) once per
/// [`now`](crate::clock::HybridLogicalClock::now) or
/// [`update`](crate::clock::HybridLogicalClock::update) with
/// `offset = candidate.wall_time - wall_now`, before any state is advanced.
/// Returning an error aborts the call without touching the clock state.
///
/// The provided implementation enforces the configured bounds through
/// [`check_offset_bounds`]. Custom policies usually call that function first
/// and then add their own bookkeeping; see
/// [`DriftMonitor`](crate::policy::DriftMonitor).
pub trait OffsetPolicy {
    /// Validates the signed offset between the merge candidate and the wall clock
    fn validate_offset(&mut self, offset: i128, config: &ClockConfig) -> ClockResult<()> {
        check_offset_bounds(offset, config)
    }
}

/// Applies the configured drift bounds to an offset
///
/// A negative offset means the local wall clock is ahead of the last known
/// timestamp. Bounds set to zero are disabled.
///
/// # Errors
/// - [`ClockError::ForwardJump`] if `-offset` exceeds
///   `tolerated_forward_clock_jump`
/// - [`ClockError::ClockOffset`] if `offset` exceeds `max_offset`
pub fn check_offset_bounds(offset: i128, config: &ClockConfig) -> ClockResult<()> {
    let tolerance = config.tolerated_forward_clock_jump;
    if tolerance > 0 && -offset > tolerance as i128 {
        return Err(ClockError::ForwardJump {
            timejump: offset.unsigned_abs() as u64,
            tolerance,
        });
    }

    let max_offset = config.max_offset;
    if max_offset > 0 && offset > max_offset as i128 {
        return Err(ClockError::ClockOffset {
            offset: offset as u64,
            max_offset,
        });
    }

    Ok(())
}
