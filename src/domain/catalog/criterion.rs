//! Criterion - a named grouping of sub-criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CriterionId;

/// A criterion groups related sub-criteria; it carries no numeric
/// attributes itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(id: CriterionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
