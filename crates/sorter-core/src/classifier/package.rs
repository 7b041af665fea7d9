//! Package measurements and the bulky/heavy predicates.

use serde::{Deserialize, Serialize};

use super::{BulkyReason, SortingThresholds};
use crate::error::{Result, SorterError};

/// Measurements of one package.
///
/// Dimensions are in length units (e.g. cm), mass in mass units (e.g. kg).
/// Construction never validates; see [`Package::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl Package {
    /// Creates a package from its measurements.
    pub const fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    /// Product of the three dimensions.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Returns true if the volume or any single dimension reaches its threshold.
    pub fn is_bulky(&self, thresholds: &SortingThresholds) -> bool {
        self.volume() >= thresholds.bulky_volume
            || self.width >= thresholds.bulky_dimension
            || self.height >= thresholds.bulky_dimension
            || self.length >= thresholds.bulky_dimension
    }

    /// Returns true if the mass reaches the heavy threshold.
    pub fn is_heavy(&self, thresholds: &SortingThresholds) -> bool {
        self.mass >= thresholds.heavy_mass
    }

    /// Lists every bulky check this package trips.
    pub fn bulky_reasons(&self, thresholds: &SortingThresholds) -> Vec<BulkyReason> {
        let checks = [
            (BulkyReason::Volume, self.volume() >= thresholds.bulky_volume),
            (BulkyReason::Width, self.width >= thresholds.bulky_dimension),
            (BulkyReason::Height, self.height >= thresholds.bulky_dimension),
            (BulkyReason::Length, self.length >= thresholds.bulky_dimension),
        ];
        checks
            .into_iter()
            .filter_map(|(reason, hit)| hit.then_some(reason))
            .collect()
    }

    /// Rejects NaN, infinite, and negative measurements.
    ///
    /// Fields are checked in width, height, length, mass order and the first
    /// offending one is reported. Zero is accepted.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
            ("mass", self.mass),
        ] {
            if !value.is_finite() {
                return Err(SorterError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(SorterError::Negative { field, value });
            }
        }
        Ok(())
    }
}
