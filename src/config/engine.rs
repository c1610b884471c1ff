//! Ranking engine configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Ranking engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Weight sums within this distance of 1 count as already normalized,
    /// suppressing the normalization audit log line.
    #[serde(default = "default_weight_sum_tolerance")]
    pub weight_sum_tolerance: f64,
}

impl EngineConfig {
    /// Validate engine configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.weight_sum_tolerance.is_finite() || self.weight_sum_tolerance < 0.0 {
            return Err(ValidationError::InvalidWeightSumTolerance);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weight_sum_tolerance: default_weight_sum_tolerance(),
        }
    }
}

fn default_weight_sum_tolerance() -> f64 {
    1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerance_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let config = EngineConfig {
            weight_sum_tolerance: -1.0,
        };
        assert!(config.validate().is_err());
    }
}
