//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Rust log filter directive
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,
}

impl LogConfig {
    /// Validate logging configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::InvalidLogLevel);
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_config_is_valid() {
        let config = LogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.level, "info");
        assert!(!config.json);
    }

    #[test]
    fn blank_level_is_rejected() {
        let config = LogConfig {
            level: "".into(),
            json: false,
        };
        assert!(config.validate().is_err());
    }
}
