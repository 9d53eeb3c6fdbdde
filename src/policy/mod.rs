//! Offset policy implementations
//!
//! - [`StrictOffsetPolicy`] enforces the configured drift bounds and nothing else
//! - [`DriftMonitor`] enforces the same bounds and counts suspicious offsets

use crate::clock::ClockConfig;
use crate::error::ClockResult;
use crate::log::hlc_debug;
use crate::traits::{OffsetPolicy, check_offset_bounds};

/// Default policy: rejects offsets outside the configured bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictOffsetPolicy;

impl OffsetPolicy for StrictOffsetPolicy {}

/// Policy that enforces the drift bounds and counts near misses
///
/// Any accepted offset larger than a tenth of `max_offset` (when `max_offset`
/// exceeds 10ns) is counted as a monotonicity warning. A steadily rising count
/// points at a peer whose clock runs ahead long before merges start failing.
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
///
/// let config = ClockConfig::new().with_max_offset(20);
/// let mut clock = HybridLogicalClock::with_policy(|| 10u64, config, DriftMonitor::new());
///
/// clock.update(&Timestamp::from_wall_time(13))?;
/// assert_eq!(clock.policy().monotonicity_errors(), 1);
/// # Ok::<(), hlcsphere::error::ClockError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriftMonitor {
    monotonicity_errors: u64,
}

impl DriftMonitor {
    /// Creates a monitor with a zero count
    pub const fn new() -> Self {
        Self {
            monotonicity_errors: 0,
        }
    }

    /// Returns how many accepted offsets exceeded a tenth of `max_offset`
    pub const fn monotonicity_errors(&self) -> u64 {
        self.monotonicity_errors
    }

    /// Resets the count to zero
    pub fn reset(&mut self) {
        self.monotonicity_errors = 0;
    }
}

impl OffsetPolicy for DriftMonitor {
    fn validate_offset(&mut self, offset: i128, config: &ClockConfig) -> ClockResult<()> {
        check_offset_bounds(offset, config)?;

        let max_offset = config.max_offset as i128;
        if max_offset > 10 && offset > max_offset / 10 {
            self.monotonicity_errors = self.monotonicity_errors.saturating_add(1);
            hlc_debug!(
                offset = %offset,
                max_offset = config.max_offset,
                count = self.monotonicity_errors,
                "offset above a tenth of max_offset"
            );
        }

        Ok(())
    }
}
