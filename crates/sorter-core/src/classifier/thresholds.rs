//! Bulky and heavy thresholds.
//!
//! All comparisons against these values are inclusive: a package sitting
//! exactly on a threshold already satisfies it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SorterError};

/// Volume (cubic length units) at or above which a package is bulky.
pub const BULKY_VOLUME: f64 = 1_000_000.0;

/// Single dimension (length units) at or above which a package is bulky.
pub const BULKY_DIMENSION: f64 = 150.0;

/// Mass (mass units) at or above which a package is heavy.
pub const HEAVY_MASS: f64 = 20.0;

/// Thresholds used by a [`PackageSorter`](super::PackageSorter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingThresholds {
    /// Minimum volume for a package to be bulky.
    pub bulky_volume: f64,
    /// Minimum width, height, or length for a package to be bulky.
    pub bulky_dimension: f64,
    /// Minimum mass for a package to be heavy.
    pub heavy_mass: f64,
}

impl Default for SortingThresholds {
    fn default() -> Self {
        Self {
            bulky_volume: BULKY_VOLUME,
            bulky_dimension: BULKY_DIMENSION,
            heavy_mass: HEAVY_MASS,
        }
    }
}

impl SortingThresholds {
    /// Checks that every threshold is a finite positive number.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("bulky_volume", self.bulky_volume),
            ("bulky_dimension", self.bulky_dimension),
            ("heavy_mass", self.heavy_mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SorterError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}
