use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::traits::WallClock;

/// Manually driven wall clock
///
/// Clones share the same underlying reading, which makes it possible to
/// freeze time for a whole group of clocks and step it explicitly. A clone
/// created through [`skewed`](Self::skewed) reports the shared reading
/// shifted by a fixed amount, modelling a node whose clock runs ahead or
/// behind.
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
///
/// let time = ManualClock::new(1);
/// let node1 = HybridLogicalClock::new(time.clone());
/// let node2 = HybridLogicalClock::new(time.skewed(5));
///
/// assert_eq!(node1.last().wall_time(), 1);
/// assert_eq!(node2.last().wall_time(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
    skew: i64,
}

impl ManualClock {
    /// Creates a clock frozen at `start`
    pub fn new(start: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start)),
            skew: 0,
        }
    }

    /// Returns a clone sharing this reading, shifted by `skew` nanoseconds
    ///
    /// Skews accumulate: skewing an already skewed clock adds both.
    pub fn skewed(&self, skew: i64) -> Self {
        Self {
            now: Arc::clone(&self.now),
            skew: self.skew.saturating_add(skew),
        }
    }

    /// Sets the shared reading
    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Advances the shared reading, saturating at `u64::MAX`
    pub fn advance(&self, amount: u64) {
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(amount))
            });
    }

    /// Returns the shared reading without this clone's skew
    pub fn get(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }

    /// Returns this clone's skew
    pub const fn skew(&self) -> i64 {
        self.skew
    }
}

impl WallClock for ManualClock {
    fn wall_time(&self) -> u64 {
        self.get().saturating_add_signed(self.skew)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_reading() {
        let a = ManualClock::new(10);
        let b = a.clone();

        a.set(20);
        assert_eq!(b.wall_time(), 20);

        b.advance(5);
        assert_eq!(a.wall_time(), 25);
    }

    #[test]
    fn test_skew() {
        let base = ManualClock::new(100);
        let ahead = base.skewed(5);
        let behind = ahead.skewed(-10);

        assert_eq!(ahead.wall_time(), 105);
        assert_eq!(behind.wall_time(), 95);
        assert_eq!(behind.skew(), -5);

        base.set(2);
        assert_eq!(behind.wall_time(), 0);
    }

    #[test]
    fn test_advance_saturates() {
        let clock = ManualClock::new(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.get(), u64::MAX);
    }
}
