//! Result archive configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Result archive configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    /// Directory where archived ranking results are stored.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl ArchiveConfig {
    /// The data directory as a path
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Validate archive configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.trim().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data/results".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_is_valid() {
        let config = ArchiveConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data_path(), PathBuf::from("data/results"));
    }

    #[test]
    fn blank_data_dir_is_rejected() {
        let config = ArchiveConfig {
            data_dir: "   ".into(),
        };
        assert!(config.validate().is_err());
    }
}
