/// Drift tolerance configuration of a [`HybridLogicalClock`](super::HybridLogicalClock)
///
/// All quantities are nanoseconds. A value of zero disables the bound, which is
/// also the default for every field.
///
/// # Example
/// ```rust
/// use hlcsphere::prelude::*;
///
/// let config = ClockConfig::new()
///     .with_max_offset(60 * 1_000_000_000)
///     .with_tolerated_forward_clock_jump(1_000_000);
///
/// assert_eq!(config.effective_upper_bound(), u64::MAX);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClockConfig {
    /// How far a merged timestamp may be ahead of the local wall clock
    pub max_offset: u64,
    /// Ceiling for issued wall times; zero means `u64::MAX`
    pub wall_time_upper_bound: u64,
    /// How far the local wall clock may advance past the last timestamp between ticks
    pub tolerated_forward_clock_jump: u64,
}

impl ClockConfig {
    /// Creates a configuration with every bound disabled
    pub const fn new() -> Self {
        Self {
            max_offset: 0,
            wall_time_upper_bound: 0,
            tolerated_forward_clock_jump: 0,
        }
    }

    /// Sets the maximum offset of merged timestamps
    pub const fn with_max_offset(mut self, max_offset: u64) -> Self {
        self.max_offset = max_offset;
        self
    }

    /// Sets the ceiling for issued wall times
    pub const fn with_wall_time_upper_bound(mut self, wall_time_upper_bound: u64) -> Self {
        self.wall_time_upper_bound = wall_time_upper_bound;
        self
    }

    /// Sets the tolerated forward jump of the local wall clock
    pub const fn with_tolerated_forward_clock_jump(mut self, tolerance: u64) -> Self {
        self.tolerated_forward_clock_jump = tolerance;
        self
    }

    /// Returns the wall-time ceiling actually enforced
    pub const fn effective_upper_bound(&self) -> u64 {
        if self.wall_time_upper_bound > 0 {
            self.wall_time_upper_bound
        } else {
            u64::MAX
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disable_everything() {
        let config = ClockConfig::default();
        assert_eq!(config, ClockConfig::new());
        assert_eq!(config.max_offset, 0);
        assert_eq!(config.tolerated_forward_clock_jump, 0);
        assert_eq!(config.effective_upper_bound(), u64::MAX);
    }

    #[test]
    fn test_builder() {
        let config = ClockConfig::new()
            .with_max_offset(3)
            .with_wall_time_upper_bound(5)
            .with_tolerated_forward_clock_jump(4);

        assert_eq!(config.max_offset, 3);
        assert_eq!(config.wall_time_upper_bound, 5);
        assert_eq!(config.tolerated_forward_clock_jump, 4);
        assert_eq!(config.effective_upper_bound(), 5);
    }
}
