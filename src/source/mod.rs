//! Wall-time sources
//!
//! Ready-made [`WallClock`](crate::traits::WallClock) implementations. Both
//! need the `std` feature; `no_std` targets inject a closure over their own
//! timer instead.

#[cfg(feature = "std")]
mod manual;
#[cfg(feature = "std")]
mod system;

#[cfg(feature = "std")]
pub use manual::ManualClock;
#[cfg(feature = "std")]
pub use system::SystemClock;
