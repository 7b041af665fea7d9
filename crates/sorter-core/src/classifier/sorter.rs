//! Stack decision for packages.
//!
//! [`classify`] is the plain four-number entry point with the fixed
//! thresholds. [`PackageSorter`] carries configurable thresholds and offers
//! explained and validated variants.

use super::{Package, SortDecision, SortingThresholds, Stack};
use crate::error::Result;

/// Classifies a package with the default thresholds.
///
/// Total over all `f64` inputs. Comparisons follow IEEE semantics: a NaN
/// measurement never satisfies a threshold, and an infinite dimension or
/// mass does. Use [`PackageSorter::sort_checked`] to reject such inputs.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Stack {
    PackageSorter::default().sort(&Package::new(width, height, length, mass))
}

/// Sorts packages onto stacks using a set of thresholds.
///
/// Plain data; share it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackageSorter {
    thresholds: SortingThresholds,
}

impl PackageSorter {
    /// Creates a sorter with the given thresholds.
    pub fn new(thresholds: SortingThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the active thresholds.
    pub fn thresholds(&self) -> &SortingThresholds {
        &self.thresholds
    }

    /// Returns the stack for a package without validating it.
    pub fn sort(&self, package: &Package) -> Stack {
        Stack::from_flags(
            package.is_bulky(&self.thresholds),
            package.is_heavy(&self.thresholds),
        )
    }

    /// Returns the stack together with the predicates that produced it.
    pub fn decide(&self, package: &Package) -> SortDecision {
        let decision = SortDecision::new(
            package.volume(),
            package.bulky_reasons(&self.thresholds),
            package.is_heavy(&self.thresholds),
        );

        tracing::debug!(
            width = package.width,
            height = package.height,
            length = package.length,
            mass = package.mass,
            volume = decision.volume,
            bulky = decision.is_bulky,
            heavy = decision.is_heavy,
            stack = %decision.stack,
            "Sorted package"
        );

        decision
    }

    /// Validates the package, then sorts it.
    pub fn sort_checked(&self, package: &Package) -> Result<Stack> {
        self.validated(package)?;
        Ok(self.sort(package))
    }

    /// Validates the package, then explains its sorting.
    pub fn decide_checked(&self, package: &Package) -> Result<SortDecision> {
        self.validated(package)?;
        Ok(self.decide(package))
    }

    fn validated(&self, package: &Package) -> Result<()> {
        package.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected invalid measurements");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::BulkyReason;
    use crate::error::SorterError;

    #[test]
    fn small_package_is_standard() {
        assert_eq!(classify(10.0, 10.0, 10.0, 5.0), Stack::Standard);
    }

    #[test]
    fn just_below_thresholds_is_standard() {
        assert_eq!(classify(149.0, 149.0, 44.0, 19.9), Stack::Standard);
    }

    #[test]
    fn bulky_by_volume_is_special() {
        assert_eq!(classify(100.0, 100.0, 100.0, 10.0), Stack::Special);
        assert_eq!(classify(100.0, 100.0, 100.0, 15.0), Stack::Special);
        assert_eq!(classify(101.0, 101.0, 99.0, 5.0), Stack::Special);
    }

    #[test]
    fn bulky_by_dimension_is_special() {
        assert_eq!(classify(150.0, 50.0, 50.0, 10.0), Stack::Special);
        assert_eq!(classify(50.0, 150.0, 50.0, 10.0), Stack::Special);
        assert_eq!(classify(50.0, 50.0, 150.0, 10.0), Stack::Special);
    }

    #[test]
    fn heavy_package_is_special() {
        assert_eq!(classify(10.0, 10.0, 10.0, 20.0), Stack::Special);
        assert_eq!(classify(50.0, 50.0, 50.0, 25.0), Stack::Special);
        assert_eq!(classify(10.0, 10.0, 10.0, 100.0), Stack::Special);
    }

    #[test]
    fn bulky_and_heavy_is_rejected() {
        assert_eq!(classify(100.0, 100.0, 100.0, 20.0), Stack::Rejected);
        assert_eq!(classify(150.0, 50.0, 50.0, 20.0), Stack::Rejected);
        assert_eq!(classify(200.0, 200.0, 200.0, 50.0), Stack::Rejected);
    }

    #[test]
    fn tiny_package_is_standard() {
        assert_eq!(classify(1.0, 1.0, 1.0, 0.1), Stack::Standard);
    }

    #[test]
    fn unchecked_path_follows_ieee_comparisons() {
        assert_eq!(classify(f64::NAN, 10.0, 10.0, 5.0), Stack::Standard);
        assert_eq!(classify(10.0, 10.0, 10.0, f64::NAN), Stack::Standard);
        assert_eq!(classify(f64::INFINITY, 10.0, 10.0, 5.0), Stack::Special);
        assert_eq!(classify(10.0, 10.0, 10.0, f64::INFINITY), Stack::Special);
        assert_eq!(classify(-200.0, -200.0, 10.0, 5.0), Stack::Standard);
    }

    #[test]
    fn decide_explains_the_stack() {
        let sorter = PackageSorter::default();
        let decision = sorter.decide(&Package::new(150.0, 50.0, 50.0, 20.0));
        assert_eq!(decision.stack, Stack::Rejected);
        assert_eq!(decision.volume, 375_000.0);
        assert!(decision.is_heavy);
        assert_eq!(decision.bulky_reasons, vec![BulkyReason::Width]);
    }

    #[test]
    fn decide_agrees_with_sort() {
        let sorter = PackageSorter::default();
        for package in [
            Package::new(10.0, 10.0, 10.0, 5.0),
            Package::new(100.0, 100.0, 100.0, 10.0),
            Package::new(50.0, 50.0, 50.0, 25.0),
            Package::new(200.0, 200.0, 200.0, 50.0),
        ] {
            assert_eq!(sorter.decide(&package).stack, sorter.sort(&package));
        }
    }

    #[test]
    fn custom_thresholds_change_outcome() {
        let sorter = PackageSorter::new(SortingThresholds {
            heavy_mass: 30.0,
            ..Default::default()
        });
        let package = Package::new(50.0, 50.0, 50.0, 25.0);
        assert_eq!(sorter.sort(&package), Stack::Standard);
        assert_eq!(sorter.thresholds().heavy_mass, 30.0);
    }

    #[test]
    fn checked_sort_rejects_invalid_measurements() {
        let sorter = PackageSorter::default();
        let err = sorter
            .sort_checked(&Package::new(-1.0, 10.0, 10.0, 5.0))
            .unwrap_err();
        assert!(matches!(err, SorterError::Negative { field: "width", .. }));

        let err = sorter
            .decide_checked(&Package::new(10.0, 10.0, 10.0, f64::NAN))
            .unwrap_err();
        assert!(matches!(err, SorterError::NotFinite { field: "mass", .. }));
    }

    #[test]
    fn checked_sort_accepts_valid_measurements() {
        let sorter = PackageSorter::default();
        assert_eq!(
            sorter
                .sort_checked(&Package::new(100.0, 100.0, 100.0, 20.0))
                .unwrap(),
            Stack::Rejected
        );
        assert_eq!(
            sorter
                .decide_checked(&Package::new(0.0, 0.0, 0.0, 0.0))
                .unwrap()
                .stack,
            Stack::Standard
        );
    }
}
