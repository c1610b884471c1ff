//! Catalog-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    CriterionId, DomainError, ErrorCode, ProductId, SubCriterionId, WeightId,
};

/// Violations of the catalog's referential invariants, detected while
/// assembling a snapshot from raw records.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Sub-criterion '{sub_criterion}' references unknown criterion '{criterion}'")]
    UnknownCriterion {
        sub_criterion: SubCriterionId,
        criterion: CriterionId,
    },

    #[error("Weight option '{weight}' references unknown sub-criterion '{sub_criterion}'")]
    UnknownSubCriterion {
        weight: WeightId,
        sub_criterion: SubCriterionId,
    },

    #[error("Assignment for product '{product}' references unknown weight '{weight}'")]
    UnknownWeight { product: ProductId, weight: WeightId },

    #[error("Assignment references unknown product '{product}'")]
    UnknownProduct { product: ProductId },

    #[error("Duplicate record id '{id}'")]
    DuplicateId { id: String },

    #[error("Product '{product}' has more than one weight for sub-criterion '{sub_criterion}'")]
    DuplicateAssignment {
        product: ProductId,
        sub_criterion: SubCriterionId,
    },

    #[error("Record '{id}' is invalid: {reason}")]
    InvalidRecord { id: String, reason: String },
}

impl CatalogError {
    /// Maps to the cross-layer error code.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::CatalogInvalid
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_assignment_displays_both_ids() {
        let err = CatalogError::DuplicateAssignment {
            product: ProductId::new("prod-1").unwrap(),
            sub_criterion: SubCriterionId::new("sub-2").unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("prod-1"));
        assert!(msg.contains("sub-2"));
    }

    #[test]
    fn catalog_errors_map_to_catalog_invalid_code() {
        let err = CatalogError::DuplicateId { id: "x".into() };
        assert_eq!(err.code(), ErrorCode::CatalogInvalid);
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::CatalogInvalid);
    }
}
