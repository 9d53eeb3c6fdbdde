use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::{ClockSnapshot, HybridLogicalClock};
use crate::error::ClockResult;
use crate::policy::StrictOffsetPolicy;
use crate::timestamp::Timestamp;
use crate::traits::{OffsetPolicy, WallClock};

/// Cloneable, thread-safe handle to a [`HybridLogicalClock`]
///
/// Every operation holds one mutex for its whole read-validate-commit
/// section, so timestamps issued through any clone of the handle are
/// strictly increasing in the order the lock was acquired.
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
/// use std::thread;
///
/// let clock = SharedClock::new(HybridLogicalClock::new(SystemClock::new()));
///
/// let worker = {
///     let clock = clock.clone();
///     thread::spawn(move || clock.now())
/// };
/// let local = clock.now()?;
/// let remote = worker.join().unwrap()?;
/// assert_ne!(local, remote);
/// # Ok::<(), hlcsphere::error::ClockError>(())
/// ```
pub struct SharedClock<W, P = StrictOffsetPolicy> {
    inner: Arc<Mutex<HybridLogicalClock<W, P>>>,
}

impl<W, P> Clone for SharedClock<W, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: WallClock, P: OffsetPolicy> SharedClock<W, P> {
    /// Wraps a clock for shared use
    pub fn new(clock: HybridLogicalClock<W, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(clock)),
        }
    }

    /// See [`HybridLogicalClock::now`]
    pub fn now(&self) -> ClockResult<Timestamp> {
        self.lock().now()
    }

    /// See [`HybridLogicalClock::update`]
    pub fn update(&self, other: &Timestamp) -> ClockResult<Timestamp> {
        self.lock().update(other)
    }

    /// See [`HybridLogicalClock::last`]
    pub fn last(&self) -> Timestamp {
        self.lock().last()
    }

    /// See [`HybridLogicalClock::snapshot`]
    pub fn snapshot(&self) -> ClockSnapshot {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the clock
    pub fn with_clock<R>(&self, f: impl FnOnce(&mut HybridLogicalClock<W, P>) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, HybridLogicalClock<W, P>> {
        // The clock commits all-or-nothing, a poisoned guard still holds a consistent state
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
