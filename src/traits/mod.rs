//! Core traits module
//!
//! This module defines the two seams of the hybrid logical clock: where it
//! reads wall time from, and how it validates drift.

pub mod offset_policy;
pub mod wall_clock;

// Re-export main traits
pub use offset_policy::{OffsetPolicy, check_offset_bounds};
pub use wall_clock::WallClock;
