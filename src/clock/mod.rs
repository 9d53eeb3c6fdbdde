//! Clock management module
//!
//! This module provides the [`HybridLogicalClock`] state machine together with
//! its configuration and its serializable snapshot form.

mod config;
mod hlc;
#[cfg(feature = "std")]
mod shared;
mod snapshot;

pub use config::ClockConfig;
pub use hlc::HybridLogicalClock;
#[cfg(feature = "std")]
pub use shared::SharedClock;
pub use snapshot::ClockSnapshot;
