//! Error handling module for hlcsphere
//!
//! Every failure of the clock or the codec is reported synchronously as a
//! [`ClockError`]. The clock state is never mutated by a failing call.

pub mod types;

// Re-export main types
pub use types::{ClockError, ClockResult};
