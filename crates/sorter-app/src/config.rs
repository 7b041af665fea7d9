//! Application configuration.
//!
//! Thresholds are read from a JSON file:
//!
//! ```json
//! { "thresholds": { "bulky_volume": 1000000, "bulky_dimension": 150, "heavy_mass": 20 } }
//! ```
//!
//! Every field is optional and falls back to the built-in thresholds.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sorter_core::{PackageSorter, SorterError, SortingThresholds};
use thiserror::Error;

/// File name looked up in the platform config directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`AppConfig`].
    #[error("failed to parse config {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Thresholds parsed but are unusable.
    #[error("invalid thresholds: {0}")]
    Thresholds(#[from] SorterError),
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults, no file read.
    Defaults,
    /// Loaded from this file.
    File(PathBuf),
}

/// Top-level configuration for the sorter binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Bulky and heavy thresholds.
    pub thresholds: SortingThresholds,
}

impl AppConfig {
    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Returns the platform config file path, e.g. `~/.config/sorter/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "sorter", "sorter")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads configuration for the binary.
    ///
    /// An explicit path must load cleanly. Without one, the platform config
    /// file is used when present; if it is broken a warning is logged and the
    /// defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        Self::load_with_fallback(explicit, Self::default_path())
    }

    /// [`AppConfig::load`] with the fallback path supplied by the caller.
    pub fn load_with_fallback(
        explicit: Option<&Path>,
        fallback: Option<PathBuf>,
    ) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            tracing::info!("Loaded config from {:?}", path);
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match fallback {
            Some(path) if path.is_file() => match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {:?}", path);
                    Ok((config, ConfigSource::File(path)))
                }
                Err(e) => {
                    tracing::warn!("Ignoring config file: {}", e);
                    Ok((Self::default(), ConfigSource::Defaults))
                }
            },
            _ => {
                tracing::debug!("No config file found, using default thresholds");
                Ok((Self::default(), ConfigSource::Defaults))
            }
        }
    }

    /// Builds a sorter from the configured thresholds.
    pub fn sorter(&self) -> PackageSorter {
        PackageSorter::new(self.thresholds)
    }
}
