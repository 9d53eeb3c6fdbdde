use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::traits::WallClock;

/// Operating system wall clock with nanosecond resolution
///
/// The Unix time is sampled once at construction; later readings add the
/// elapsed time of the monotonic [`Instant`] clock. Readings therefore never
/// go backwards, even if the system time is stepped while the clock runs.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    anchor_nanos: u64,
    anchor: Instant,
}

impl SystemClock {
    /// Creates a clock anchored at the current system time
    pub fn new() -> Self {
        let anchor_nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|since_epoch| u64::try_from(since_epoch.as_nanos()).unwrap_or(u64::MAX))
            // System time before 1970 is treated as the epoch itself
            .unwrap_or(0);
        Self {
            anchor_nanos,
            anchor: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn wall_time(&self) -> u64 {
        let elapsed = u64::try_from(self.anchor.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.anchor_nanos.saturating_add(elapsed)
    }
}
