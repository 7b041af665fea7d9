//! Sorter Core - package classification into handling stacks.
//!
//! A package is *bulky* when its volume or any single dimension reaches the
//! bulky thresholds, and *heavy* when its mass reaches the heavy threshold.
//! Neither puts it on the standard stack, exactly one on the special stack,
//! both on the rejected stack.
//!
//! ```
//! use sorter_core::{classify, Stack};
//!
//! assert_eq!(classify(10.0, 10.0, 10.0, 5.0), Stack::Standard);
//! assert_eq!(classify(100.0, 100.0, 100.0, 20.0), Stack::Rejected);
//! ```

pub mod classifier;
pub mod error;

pub use classifier::{
    classify, BulkyReason, Package, PackageSorter, SortDecision, SortingThresholds, Stack,
};
pub use error::{Result, SorterError};
