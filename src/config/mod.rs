//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `OUTRANKER_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use outranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Archiving results under {}", config.archive.data_dir);
//! ```

mod archive;
mod engine;
mod error;
mod log;

pub use archive::ArchiveConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ranking engine tuning
    #[serde(default)]
    pub engine: EngineConfig,

    /// Result archive storage
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// Log filtering and output format
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `OUTRANKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `OUTRANKER__ARCHIVE__DATA_DIR=/var/results` -> `archive.data_dir`
    /// - `OUTRANKER__LOG__LEVEL=debug` -> `log.level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("OUTRANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.archive.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = AppConfig::default();
        assert_eq!(config.engine.weight_sum_tolerance, 1e-9);
        assert_eq!(config.archive.data_dir, "data/results");
        assert_eq!(config.log.level, "info");
    }
}
