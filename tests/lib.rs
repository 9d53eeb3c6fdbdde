//! Common utilities and shared code for property-based testing of the clock
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Common generators for timestamps and clock operations
//! - Helper functions for verifying clock properties

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use hlcsphere::prelude::*;
use proptest::prelude::*;
use proptest_derive::Arbitrary;

/// Standard proptest configuration for clock property tests
pub fn clock_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        timeout: 2000,
        ..ProptestConfig::default()
    }
}

/// Configuration for long operation sequences
pub fn sequence_config() -> ProptestConfig {
    ProptestConfig {
        cases: 32,
        max_shrink_iters: 100,
        timeout: 5000,
        ..ProptestConfig::default()
    }
}

/// Start of the simulated wall clock, far from both ends of the range
pub const START_TIME: u64 = 1_000_000;

/// A single step applied to a clock under test
#[derive(Debug, Clone, Copy, Arbitrary)]
pub enum ClockOp {
    /// Issue a local timestamp
    Tick,
    /// Move the wall clock forward
    Advance(#[proptest(strategy = "1u64..1_000")] u64),
    /// Step the wall clock backwards
    Regress(#[proptest(strategy = "1u64..1_000")] u64),
    /// Merge a remote timestamp placed relative to the wall clock
    Merge(
        #[proptest(strategy = "-1_000i64..1_000")] i64,
        #[proptest(strategy = "0u32..8")] u32,
    ),
}

/// Generate arbitrary timestamps over the full range
pub fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (any::<u64>(), any::<u32>()).prop_map(|(wall_time, logical)| Timestamp::new(wall_time, logical))
}

/// Generate timestamps clustered around a small range so collisions happen
pub fn clustered_timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (0u64..4, 0u32..4).prop_map(|(wall_time, logical)| Timestamp::new(wall_time, logical))
}

/// Generate sequences of clock operations
pub fn operation_sequence_strategy() -> impl Strategy<Value = Vec<ClockOp>> {
    prop::collection::vec(any::<ClockOp>(), 1..64)
}

/// Applies one operation, returning the timestamp the clock issued (if any)
pub fn apply_op<P: OffsetPolicy>(
    clock: &mut HybridLogicalClock<ManualClock, P>,
    time: &ManualClock,
    op: ClockOp,
) -> Option<ClockResult<Timestamp>> {
    match op {
        ClockOp::Tick => Some(clock.now()),
        ClockOp::Advance(amount) => {
            time.advance(amount);
            None
        }
        ClockOp::Regress(amount) => {
            time.set(time.get().saturating_sub(amount));
            None
        }
        ClockOp::Merge(delta, logical) => {
            let remote = Timestamp::new(time.get().saturating_add_signed(delta), logical);
            Some(clock.update(&remote))
        }
    }
}

/// Helper function to verify a sequence is strictly increasing
pub fn assert_strictly_increasing(issued: &[Timestamp]) -> bool {
    issued.windows(2).all(|pair| pair[0] < pair[1])
}
