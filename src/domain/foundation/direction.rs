//! Direction enum for sub-criterion optimization sense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Optimization direction of a sub-criterion.
///
/// Determines the sign of the score difference fed into the preference
/// function: `Max` prefers higher scores, `Min` prefers lower scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Max,
    Min,
}

impl Direction {
    /// Returns the signed difference of `a` over `b` in this direction.
    pub fn signed_difference(&self, a: f64, b: f64) -> f64 {
        match self {
            Direction::Max => a - b,
            Direction::Min => b - a,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Max => "max",
            Direction::Min => "min",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(Direction::Max),
            "min" => Ok(Direction::Min),
            other => Err(ValidationError::invalid_format(
                "min_max",
                format!("expected 'min' or 'max', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_difference_is_a_minus_b() {
        assert_eq!(Direction::Max.signed_difference(50.0, 40.0), 10.0);
        assert_eq!(Direction::Max.signed_difference(40.0, 50.0), -10.0);
    }

    #[test]
    fn min_difference_is_b_minus_a() {
        assert_eq!(Direction::Min.signed_difference(50.0, 40.0), -10.0);
        assert_eq!(Direction::Min.signed_difference(40.0, 50.0), 10.0);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("MAX".parse::<Direction>().unwrap(), Direction::Max);
        assert_eq!(" min ".parse::<Direction>().unwrap(), Direction::Min);
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Max).unwrap(), "\"max\"");
        assert_eq!(serde_json::to_string(&Direction::Min).unwrap(), "\"min\"");
    }
}
