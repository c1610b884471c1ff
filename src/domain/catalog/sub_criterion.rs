//! SubCriterion - the unit of comparison in the outranking computation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CriterionId, Direction, PreferenceType, SubCriterionId, ValidationError,
};

/// A sub-criterion: preference shape, direction, aggregation weight, and
/// optional threshold parameters.
///
/// Which of `p` (preference), `q` (indifference), and `s` (Gaussian
/// inflection) are required depends on the preference type; that contract
/// is enforced when the preference function is constructed. The data-model
/// invariant `q <= p` is enforced here whenever both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCriterion {
    pub id: SubCriterionId,
    pub criterion_id: CriterionId,
    pub name: String,
    pub preference_type: PreferenceType,
    pub direction: Direction,
    /// Aggregation weight of this sub-criterion; weights are normalized to
    /// sum 1 across the catalog before use.
    pub weight: f64,
    pub p: Option<f64>,
    pub q: Option<f64>,
    pub s: Option<f64>,
}

impl SubCriterion {
    /// Creates a sub-criterion with default weight 1.0 and no thresholds.
    pub fn new(
        id: SubCriterionId,
        criterion_id: CriterionId,
        name: impl Into<String>,
        preference_type: PreferenceType,
        direction: Direction,
    ) -> Self {
        Self {
            id,
            criterion_id,
            name: name.into(),
            preference_type,
            direction,
            weight: 1.0,
            p: None,
            q: None,
            s: None,
        }
    }

    /// Sets the aggregation weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the preference threshold `p`.
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = Some(p);
        self
    }

    /// Sets the indifference threshold `q`.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = Some(q);
        self
    }

    /// Sets the Gaussian inflection point `s`.
    pub fn with_s(mut self, s: f64) -> Self {
        self.s = Some(s);
        self
    }

    /// Validates the data-model invariants.
    ///
    /// # Errors
    ///
    /// - `q > p` when both thresholds are present
    /// - non-finite or negative aggregation weight
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(q), Some(p)) = (self.q, self.p) {
            if q > p {
                return Err(ValidationError::invalid_format(
                    "q",
                    format!("indifference threshold {} exceeds preference threshold {}", q, p),
                ));
            }
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ValidationError::invalid_format(
                "weight",
                format!("aggregation weight must be a non-negative number, got {}", self.weight),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(pt: PreferenceType) -> SubCriterion {
        SubCriterion::new(
            SubCriterionId::new("sub-1").unwrap(),
            CriterionId::new("crit-1").unwrap(),
            "Price",
            pt,
            Direction::Min,
        )
    }

    #[test]
    fn new_defaults_to_unit_weight_and_no_thresholds() {
        let s = sub(PreferenceType::Usual);
        assert_eq!(s.weight, 1.0);
        assert!(s.p.is_none() && s.q.is_none() && s.s.is_none());
    }

    #[test]
    fn validate_accepts_q_equal_to_p() {
        let s = sub(PreferenceType::Level).with_q(5.0).with_p(5.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_rejects_q_above_p() {
        let s = sub(PreferenceType::Level).with_q(8.0).with_p(5.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let s = sub(PreferenceType::Usual).with_weight(-0.5);
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_allows_missing_thresholds() {
        let s = sub(PreferenceType::Gaussian).with_s(2.0);
        assert!(s.validate().is_ok());
    }
}
