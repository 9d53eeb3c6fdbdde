#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Hybrid Logical Clocks for Distributed Coordination**
//!
//! hlcsphere is a `no_std` Rust library implementing Hybrid Logical Clocks
//! (HLC). A hybrid timestamp pairs a nanosecond wall-clock reading with a
//! logical counter, giving timestamps that
//!
//! - stay close to physical time,
//! - strictly increase on every node, even when the wall clock stalls or steps back,
//! - order causally across nodes once timestamps are exchanged.
//!
//! ## Features
//!
//! - **No Dynamic Allocation** - The clock and its timestamps are plain values
//! - **Injectable Time** - Any `Fn() -> u64` is a wall-clock source
//! - **Drift Protection** - Bounded offsets, forward-jump detection and wall-time ceilings
//! - **Fixed Wire Format** - 12-byte big-endian encoding that sorts like the timestamps
//! - **Restart Safe** - Snapshot and restore clock state
//!
//! ## Feature Overview
//!
//! - `std` (default) - [`SystemClock`], [`ManualClock`] and [`SharedClock`]
//! - `serde` - Serde support for timestamps and snapshots (no_std compatible)
//! - `tracing` - Structured logs for rejected merges and committed ticks
//!
//! ## Quick Start
//!
//! ```rust
//! use hlcsphere::prelude::*;
//!
//! fn example() -> Result<(), ClockError> {
//!     let config = ClockConfig::new().with_max_offset(60 * 1_000_000_000);
//!     let mut node1 = HybridLogicalClock::with_config(SystemClock::new(), config);
//!     let mut node2 = HybridLogicalClock::with_config(SystemClock::new(), config);
//!
//!     // node1 sends an event stamped with its clock
//!     let sent = node1.now()?;
//!     let bytes = sent.encode();
//!
//!     // node2 receives it and orders its next event after it
//!     let received = Timestamp::decode(&bytes, 0)?;
//!     node2.update(&received)?;
//!     assert!(node2.now()? > sent);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Node Identity
//!
//! Two nodes can issue the same `(wall_time, logical)` pair. The crate does not
//! assign node identifiers; pair timestamps with your own node id where a
//! unique order is required.
//!
//! [`SystemClock`]: crate::source::SystemClock
//! [`ManualClock`]: crate::source::ManualClock
//! [`SharedClock`]: crate::clock::SharedClock

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

mod log;

// Core infrastructure modules
pub mod clock;
pub mod codec;
pub mod error;
pub mod policy;
pub mod source;
pub mod timestamp;
pub mod traits;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde_int;

/// Prelude module of hlcsphere
///
/// Convenient re-exports for common hlcsphere types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export error types
    pub use crate::error::{ClockError, ClockResult};

    // Re-export clock types
    pub use crate::clock::{ClockConfig, ClockSnapshot, HybridLogicalClock};
    #[cfg(feature = "std")]
    pub use crate::clock::SharedClock;

    // Re-export timestamp and codec
    pub use crate::codec;
    pub use crate::timestamp::Timestamp;

    // Re-export policies and time sources
    pub use crate::policy::{DriftMonitor, StrictOffsetPolicy};
    #[cfg(feature = "std")]
    pub use crate::source::{ManualClock, SystemClock};
}
