//! Package classification.
//!
//! This module provides the bulky/heavy predicates and the stack decision
//! built on top of them.

mod package;
mod sorter;
mod stack;
mod thresholds;

pub use package::Package;
pub use sorter::{classify, PackageSorter};
pub use stack::{BulkyReason, SortDecision, Stack};
pub use thresholds::SortingThresholds;
