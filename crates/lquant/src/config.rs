//! Search configuration.

use crate::error::LquantError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Configuration for the tableau search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Inclusive bound of the search universe `[-max, max]`
    pub max: i64,
    /// Maximum number of rule applications (0 means no limit)
    pub max_steps: usize,
    /// Enable structured profiling (zero overhead when false)
    pub enable_profiling: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max: 4,
            max_steps: 0, // 0 means no limit
            enable_profiling: false,
        }
    }
}

impl SearchConfig {
    /// Create a configuration for the universe `[-max, max]`
    pub fn new(max: i64) -> Self {
        SearchConfig {
            max,
            ..SearchConfig::default()
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_profiling(mut self, enable: bool) -> Self {
        self.enable_profiling = enable;
        self
    }

    /// Reject configurations that do not describe a universe
    pub fn validate(&self) -> Result<(), LquantError> {
        if self.max < 0 {
            return Err(LquantError::InvalidBound(self.max));
        }
        Ok(())
    }

    /// All values of the bounded universe, in ascending order
    pub fn universe(&self) -> RangeInclusive<i64> {
        -self.max..=self.max
    }

    /// Whether `value` lies in `[-max, max]`
    pub fn in_range(&self, value: i64) -> bool {
        self.universe().contains(&value)
    }

    /// Saturate `value` into `[-max, max]`
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(-self.max, self.max)
    }

    /// Saturate a wide intermediate result into `[-max, max]`
    pub fn clamp_wide(&self, value: i128) -> i64 {
        // The clamped value always fits since max is an i64
        value.clamp(-(self.max as i128), self.max as i128) as i64
    }
}
