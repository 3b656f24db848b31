//! Layer generation configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default containment tolerance, in container units.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Common configuration for layer generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Spacing forced between adjacent boxes when generating a layer.
    pub forced_space: f64,

    /// Tolerance when checking that box footprints stay on the container.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forced_space: 0.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the forced spacing between boxes.
    pub fn with_forced_space(mut self, space: f64) -> Self {
        self.forced_space = space;
        self
    }

    /// Sets the containment tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that spacing and tolerance are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.forced_space.is_finite() || self.forced_space < 0.0 {
            return Err(Error::ConfigError(format!(
                "forced space must be a non-negative number, got {}",
                self.forced_space
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::ConfigError(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
