//! Wall-time source trait
//!
//! The clock observes real time only through a [`WallClock`]. Injecting the
//! source keeps the clock deterministic under test and lets embedded targets
//! plug in whatever counter they have.

/// Source of wall-clock readings in nanoseconds
///
/// Implementations must be side-effect-free queries; the clock may call
/// [`wall_time`](Self::wall_time) from any context. Readings are not required
/// to be monotonic, since the clock tolerates regressions.
///
/// Every `Fn() -> u64` is a `WallClock`.
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
///
/// let frozen = || 42u64;
/// assert_eq!(frozen.wall_time(), 42);
/// ```
pub trait WallClock {
    /// Returns the current wall time in nanoseconds
    fn wall_time(&self) -> u64;
}

impl<F> WallClock for F
where
    F: Fn() -> u64,
{
    #[inline]
    fn wall_time(&self) -> u64 {
        self()
    }
}
