//! Sorter - command-line front end for package classification.
//!
//! This crate provides the pieces behind the `sorter` binary:
//!
//! - Threshold configuration loading
//! - The demonstration package catalog
//! - Table, rule summary, and JSON rendering
//!
//! # Usage
//!
//! ```
//! use sorter_app::catalog::DEMO_PACKAGES;
//! use sorter_app::config::AppConfig;
//! use sorter_app::report::render_demo;
//!
//! let sorter = AppConfig::default().sorter();
//! let report = render_demo(DEMO_PACKAGES, &sorter);
//! assert!(report.contains("Classification Rules:"));
//! ```

pub mod catalog;
pub mod config;
pub mod report;

pub use catalog::{CatalogEntry, DEMO_PACKAGES};
pub use config::{AppConfig, ConfigError, ConfigSource};
