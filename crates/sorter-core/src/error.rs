//! Sorter error types.

use thiserror::Error;

/// Errors produced by the checked classification paths and threshold loading.
///
/// The unchecked [`classify`](crate::classify) path never produces these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SorterError {
    /// A measurement was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// A measurement was below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A threshold was non-finite, zero, or negative.
    #[error("threshold {name} must be a finite positive number, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A stack label did not name one of the three stacks.
    #[error("unknown stack: {0}")]
    UnknownStack(String),
}

/// Result type for sorter operations.
pub type Result<T> = std::result::Result<T, SorterError>;
