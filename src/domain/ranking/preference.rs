//! Preference Function Library - the six PROMETHEE preference shapes.

use crate::domain::catalog::SubCriterion;
use crate::domain::foundation::PreferenceType;

use super::RankingError;

/// A validated preference function for one sub-criterion.
///
/// Threshold parameters are checked once at construction; evaluation is
/// then a pure, stateless mapping from a signed score difference to a
/// preference degree in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceFunction {
    shape: Shape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Usual,
    Quasi { q: f64 },
    Linear { p: f64 },
    Level { q: f64, p: f64 },
    LinearWithIndifference { q: f64, p: f64 },
    Gaussian { s: f64 },
}

impl PreferenceFunction {
    /// Builds the preference function a sub-criterion declares.
    ///
    /// # Errors
    ///
    /// `InvalidThreshold` when a required parameter is absent, non-positive
    /// where positivity is required, or violates the `q < p` ordering for
    /// the linear-with-indifference shape.
    pub fn for_sub_criterion(sub: &SubCriterion) -> Result<Self, RankingError> {
        let shape = match sub.preference_type {
            PreferenceType::Usual => Shape::Usual,
            PreferenceType::Quasi => {
                let q = require(sub, "q", sub.q)?;
                if q < 0.0 {
                    return Err(threshold_error(sub, "q must be non-negative"));
                }
                Shape::Quasi { q }
            }
            PreferenceType::Linear => {
                let p = require(sub, "p", sub.p)?;
                if p <= 0.0 {
                    return Err(threshold_error(sub, "p must be positive"));
                }
                Shape::Linear { p }
            }
            PreferenceType::Level => {
                let q = require(sub, "q", sub.q)?;
                let p = require(sub, "p", sub.p)?;
                if q < 0.0 {
                    return Err(threshold_error(sub, "q must be non-negative"));
                }
                if q > p {
                    return Err(threshold_error(sub, "q must not exceed p"));
                }
                Shape::Level { q, p }
            }
            PreferenceType::LinearWithIndifference => {
                let q = require(sub, "q", sub.q)?;
                let p = require(sub, "p", sub.p)?;
                if q < 0.0 {
                    return Err(threshold_error(sub, "q must be non-negative"));
                }
                if q >= p {
                    return Err(threshold_error(sub, "q must be strictly below p"));
                }
                Shape::LinearWithIndifference { q, p }
            }
            PreferenceType::Gaussian => {
                let s = require(sub, "s", sub.s)?;
                if s <= 0.0 {
                    return Err(threshold_error(sub, "s must be positive"));
                }
                Shape::Gaussian { s }
            }
        };
        Ok(Self { shape })
    }

    /// Maps a signed score difference to a preference degree in `[0, 1]`.
    pub fn degree(&self, d: f64) -> f64 {
        match self.shape {
            Shape::Usual => {
                if d <= 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Shape::Quasi { q } => {
                if d <= q {
                    0.0
                } else {
                    1.0
                }
            }
            Shape::Linear { p } => {
                if d <= 0.0 {
                    0.0
                } else if d >= p {
                    1.0
                } else {
                    d / p
                }
            }
            Shape::Level { q, p } => {
                if d <= q {
                    0.0
                } else if d <= p {
                    0.5
                } else {
                    1.0
                }
            }
            Shape::LinearWithIndifference { q, p } => {
                if d <= q {
                    0.0
                } else if d >= p {
                    1.0
                } else {
                    (d - q) / (p - q)
                }
            }
            Shape::Gaussian { s } => {
                if d <= 0.0 {
                    0.0
                } else {
                    1.0 - (-(d * d) / (2.0 * s * s)).exp()
                }
            }
        }
    }
}

fn require(sub: &SubCriterion, name: &str, value: Option<f64>) -> Result<f64, RankingError> {
    value.ok_or_else(|| {
        threshold_error(
            sub,
            format!("'{}' is required for the {} shape", name, sub.preference_type),
        )
    })
}

fn threshold_error(sub: &SubCriterion, reason: impl Into<String>) -> RankingError {
    RankingError::invalid_threshold(sub.id.clone(), reason)
}
