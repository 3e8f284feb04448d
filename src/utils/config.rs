use crate::GridError;

/// Parameters of a fresh simulation, passed explicitly to [`create`](crate::create).
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Side length of the square field.
    pub size: usize,
    /// Chance of each cell being alive in the random draw, in percent.
    pub live_percent: f64,
    /// Seed of the random draw (if `None`, then random seed is generated).
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            live_percent: Self::DEFAULT_LIVE_PERCENT,
            seed: None,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_SIZE: usize = 40;
    pub const DEFAULT_LIVE_PERCENT: f64 = 20.;

    pub fn new(size: usize, live_percent: f64) -> Self {
        Self {
            size,
            live_percent,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Out-of-range percentages are rejected, not clamped.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.size == 0 {
            return Err(GridError::InvalidSize(self.size));
        }
        if !(0.0..=100.0).contains(&self.live_percent) {
            // NaN fails the range check as well
            return Err(GridError::InvalidProbability(self.live_percent));
        }
        Ok(())
    }

    /// Probability of a cell being alive, in `[0, 1]` once validated.
    pub fn fill_rate(&self) -> f64 {
        self.live_percent / 100.
    }
}
