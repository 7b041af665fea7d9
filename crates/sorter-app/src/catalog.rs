//! Example packages shown by the demonstration report.

use sorter_core::Package;

/// A named example package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub package: Package,
}

impl CatalogEntry {
    const fn new(name: &'static str, width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            name,
            package: Package::new(width, height, length, mass),
        }
    }
}

/// Packages covering each stack and the threshold edges.
pub const DEMO_PACKAGES: &[CatalogEntry] = &[
    CatalogEntry::new("Small Standard Package", 10.0, 10.0, 10.0, 5.0),
    CatalogEntry::new("Bulky by Volume", 100.0, 100.0, 100.0, 10.0),
    CatalogEntry::new("Bulky by Dimension", 150.0, 50.0, 50.0, 10.0),
    CatalogEntry::new("Heavy Package", 50.0, 50.0, 50.0, 25.0),
    CatalogEntry::new("Both Bulky and Heavy", 100.0, 100.0, 100.0, 20.0),
    CatalogEntry::new("Just Below Thresholds", 149.0, 149.0, 44.0, 19.9),
    CatalogEntry::new("Extremely Large and Heavy", 200.0, 200.0, 200.0, 50.0),
];
