//! Hybrid logical clock state machine

use core::fmt;

use crate::clock::{ClockConfig, ClockSnapshot};
use crate::error::{ClockError, ClockResult};
use crate::log::{hlc_debug, hlc_trace, hlc_warn};
use crate::policy::StrictOffsetPolicy;
use crate::timestamp::Timestamp;
use crate::traits::{OffsetPolicy, WallClock};

/// Hybrid Logical Clock
///
/// Issues timestamps that are strictly increasing for this instance and that
/// order causally across nodes once timestamps are exchanged through
/// [`update`](Self::update).
///
/// # Type Parameters
/// - `W`: Source of wall-clock readings, any `Fn() -> u64` works
/// - `P`: Offset validation policy, [`StrictOffsetPolicy`] by default
///
/// # Concurrency Behavior
/// Both [`now`](Self::now) and [`update`](Self::update) take `&mut self`; a
/// call either commits a new timestamp or fails without changing any state.
/// For use from several threads wrap the clock in a
/// [`SharedClock`](crate::clock::SharedClock) (requires `std`), or provide
/// your own mutual exclusion around the whole call.
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
///
/// let mut clock = HybridLogicalClock::new(|| 100u64);
///
/// // Frozen wall clock: the logical counter keeps timestamps unique
/// let first = clock.now()?;
/// let second = clock.now()?;
/// assert!(second > first);
///
/// // A remote timestamp from the future moves this clock ahead
/// clock.update(&Timestamp::new(150, 7))?;
/// assert_eq!(clock.now()?, Timestamp::new(150, 9));
/// # Ok::<(), hlcsphere::error::ClockError>(())
/// ```
#[derive(Clone)]
pub struct HybridLogicalClock<W, P = StrictOffsetPolicy> {
    source: W,
    policy: P,
    config: ClockConfig,
    last: Timestamp,
}

impl<W: WallClock> HybridLogicalClock<W> {
    /// Creates a clock with every drift bound disabled
    ///
    /// The clock starts at the current reading of `source`.
    pub fn new(source: W) -> Self {
        Self::with_config(source, ClockConfig::new())
    }

    /// Creates a clock with the given drift configuration
    pub fn with_config(source: W, config: ClockConfig) -> Self {
        Self::with_policy(source, config, StrictOffsetPolicy)
    }

    /// Recreates a clock from a snapshot
    ///
    /// The configuration is taken over as is; the snapshot's timestamp is
    /// resumed through [`resume_from`](Self::resume_from).
    pub fn restore(source: W, snapshot: ClockSnapshot) -> Self {
        Self::with_config(source, snapshot.config()).resume_from(snapshot.last)
    }
}

impl<W: WallClock, P: OffsetPolicy> HybridLogicalClock<W, P> {
    /// Creates a clock with a custom offset policy
    pub fn with_policy(source: W, config: ClockConfig, policy: P) -> Self {
        let last = Timestamp::from_wall_time(source.wall_time());
        Self {
            source,
            policy,
            config,
            last,
        }
    }

    /// Resumes from a previously issued timestamp
    ///
    /// The clock continues from whichever is greater: `last` or its current
    /// state. A stale timestamp therefore never moves the clock backwards.
    pub fn resume_from(mut self, last: Timestamp) -> Self {
        if last > self.last {
            hlc_debug!(
                wall_time = last.wall_time(),
                logical = last.logical(),
                wall_now = self.last.wall_time(),
                "resuming from a timestamp ahead of the wall clock"
            );
        }
        self.last = Timestamp::bigger(last, self.last);
        self
    }

    /// Issues a new timestamp from the local wall clock
    ///
    /// Equivalent to merging the clock's own last timestamp through
    /// [`update`](Self::update).
    ///
    /// # Errors
    /// See [`update`](Self::update).
    pub fn now(&mut self) -> ClockResult<Timestamp> {
        let last = self.last;
        self.update(&last)
    }

    /// Merges a timestamp observed elsewhere and issues a new one
    ///
    /// The returned timestamp compares greater than both `other` and every
    /// timestamp this clock issued before. Timestamps not greater than the
    /// clock's state are absorbed without moving it backwards.
    ///
    /// When the logical counter is exhausted for a wall time, the wall time
    /// is advanced by one nanosecond and the counter restarts at zero.
    ///
    /// # Errors
    /// - [`ClockError::ForwardJump`] if the local wall clock moved past the
    ///   clock state by more than `tolerated_forward_clock_jump`
    /// - [`ClockError::ClockOffset`] if the merged timestamp is ahead of the
    ///   local wall clock by more than `max_offset`
    /// - any other error returned by the [`OffsetPolicy`]
    /// - [`ClockError::WallTimeOverflow`] if the new wall time exceeds the
    ///   effective upper bound
    ///
    /// The clock state is unchanged whenever an error is returned.
    pub fn update(&mut self, other: &Timestamp) -> ClockResult<Timestamp> {
        let candidate = Timestamp::bigger(*other, self.last);
        let wall_now = self.source.wall_time();
        let offset = i128::from(candidate.wall_time()) - i128::from(wall_now);

        if let Err(err) = self.policy.validate_offset(offset, &self.config) {
            hlc_warn!(
                kind = err.kind(),
                candidate = candidate.wall_time(),
                wall_now,
                "rejected clock offset: {}",
                err
            );
            return Err(err);
        }

        let (wall_time, logical) = if offset < 0 {
            (u128::from(wall_now), 0)
        } else {
            match candidate.logical().checked_add(1) {
                Some(logical) => (u128::from(candidate.wall_time()), logical),
                None => (u128::from(candidate.wall_time()) + 1, 0),
            }
        };

        let max_time = self.config.effective_upper_bound();
        let wall_time = match u64::try_from(wall_time) {
            Ok(wall_time) if wall_time <= max_time => wall_time,
            _ => {
                let err = ClockError::WallTimeOverflow {
                    time: wall_time,
                    max_time,
                };
                hlc_warn!(kind = err.kind(), max_time, "rejected wall time: {}", err);
                return Err(err);
            }
        };

        self.last = Timestamp::new(wall_time, logical);
        hlc_trace!(
            wall_time,
            logical,
            rolled_over = offset >= 0 && logical == 0,
            "committed timestamp"
        );
        Ok(self.last)
    }

    /// Returns the last timestamp issued or merged
    pub const fn last(&self) -> Timestamp {
        self.last
    }

    /// Returns the drift configuration
    pub const fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Returns the offset policy
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns the offset policy mutably
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Returns the wall-time source
    pub const fn source(&self) -> &W {
        &self.source
    }

    /// Captures configuration and last timestamp for persistence
    pub const fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot::new(self.config, self.last)
    }
}

impl<W, P: fmt::Debug> fmt::Debug for HybridLogicalClock<W, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HybridLogicalClock")
            .field("last", &self.last)
            .field("config", &self.config)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
