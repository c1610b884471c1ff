//! WeightOption - a named numeric weight bound to one sub-criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubCriterionId, WeightId};

/// A named weight option for a sub-criterion.
///
/// The value is carried as the raw string the upstream store holds; the
/// Weight Resolver parses it, so a non-numeric value surfaces as a
/// `MalformedWeight` error at evaluation time rather than being dropped
/// during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightOption {
    pub id: WeightId,
    pub sub_criterion_id: SubCriterionId,
    pub label: String,
    pub value: String,
}

impl WeightOption {
    /// Creates a new weight option.
    pub fn new(
        id: WeightId,
        sub_criterion_id: SubCriterionId,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sub_criterion_id,
            label: label.into(),
            value: value.into(),
        }
    }

    /// Parses the weight value as a real number, if possible.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}
