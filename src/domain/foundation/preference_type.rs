//! PreferenceType enum selecting one of the six PROMETHEE preference shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The six standard PROMETHEE preference function shapes.
///
/// Each sub-criterion references exactly one shape; which threshold
/// parameters (`p`, `q`, `s`) are required depends on the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceType {
    /// Strict preference for any positive difference.
    Usual,
    /// Indifferent up to `q`, strict preference beyond.
    Quasi,
    /// Preference grows linearly up to `p`.
    Linear,
    /// Three-step preference: none, half, full (`q`, `p`).
    Level,
    /// Indifferent up to `q`, linear between `q` and `p`, full beyond.
    LinearWithIndifference,
    /// Smooth preference governed by the inflection point `s`.
    Gaussian,
}

impl PreferenceType {
    /// All six shapes, in conventional PROMETHEE order.
    pub const ALL: [PreferenceType; 6] = [
        PreferenceType::Usual,
        PreferenceType::Quasi,
        PreferenceType::Linear,
        PreferenceType::Level,
        PreferenceType::LinearWithIndifference,
        PreferenceType::Gaussian,
    ];
}

impl fmt::Display for PreferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PreferenceType::Usual => "usual",
            PreferenceType::Quasi => "quasi",
            PreferenceType::Linear => "linear",
            PreferenceType::Level => "level",
            PreferenceType::LinearWithIndifference => "linear_with_indifference",
            PreferenceType::Gaussian => "gaussian",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PreferenceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "usual" | "i" => Ok(PreferenceType::Usual),
            "quasi" | "u_shape" | "ii" => Ok(PreferenceType::Quasi),
            "linear" | "v_shape" | "iii" => Ok(PreferenceType::Linear),
            "level" | "iv" => Ok(PreferenceType::Level),
            "linear_with_indifference" | "linear_quasi" | "v" => {
                Ok(PreferenceType::LinearWithIndifference)
            }
            "gaussian" | "vi" => Ok(PreferenceType::Gaussian),
            other => Err(ValidationError::invalid_format(
                "preference_type",
                format!("unknown preference type '{}'", other),
            )),
        }
    }
}
