//! Ranking-specific error types.
//!
//! Every variant aborts the whole run: a partial outranking matrix is not a
//! meaningful ranking. Nothing here is retried automatically; retries after
//! fixing the catalog are the caller's responsibility.

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId, SubCriterionId, WeightId};

/// Errors raised while computing a ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum RankingError {
    /// A product has no assigned weight for a catalog sub-criterion.
    IncompleteAssignment {
        product: ProductId,
        sub_criterion: SubCriterionId,
    },
    /// An assigned weight value is not numeric.
    MalformedWeight { weight: WeightId, value: String },
    /// A preference function's threshold parameter contract is violated.
    InvalidThreshold {
        sub_criterion: SubCriterionId,
        reason: String,
    },
    /// Zero products or zero sub-criteria.
    EmptyCatalog {
        products: usize,
        sub_criteria: usize,
    },
    /// The aggregation weights sum to zero; nothing can be normalized.
    ZeroWeightSum,
    /// The snapshot violated a catalog invariant.
    Catalog(CatalogError),
}

impl RankingError {
    pub fn incomplete_assignment(product: ProductId, sub_criterion: SubCriterionId) -> Self {
        RankingError::IncompleteAssignment {
            product,
            sub_criterion,
        }
    }

    pub fn malformed_weight(weight: WeightId, value: impl Into<String>) -> Self {
        RankingError::MalformedWeight {
            weight,
            value: value.into(),
        }
    }

    pub fn invalid_threshold(sub_criterion: SubCriterionId, reason: impl Into<String>) -> Self {
        RankingError::InvalidThreshold {
            sub_criterion,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::IncompleteAssignment { .. } => ErrorCode::IncompleteAssignment,
            RankingError::MalformedWeight { .. } => ErrorCode::MalformedWeight,
            RankingError::InvalidThreshold { .. } => ErrorCode::InvalidThreshold,
            RankingError::EmptyCatalog { .. } => ErrorCode::EmptyCatalog,
            RankingError::ZeroWeightSum => ErrorCode::CatalogInvalid,
            RankingError::Catalog(err) => err.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            RankingError::IncompleteAssignment {
                product,
                sub_criterion,
            } => format!(
                "Product '{}' has no weight assigned for sub-criterion '{}'",
                product, sub_criterion
            ),
            RankingError::MalformedWeight { weight, value } => format!(
                "Weight option '{}' has non-numeric value '{}'",
                weight, value
            ),
            RankingError::InvalidThreshold {
                sub_criterion,
                reason,
            } => format!(
                "Sub-criterion '{}' has invalid thresholds: {}",
                sub_criterion, reason
            ),
            RankingError::EmptyCatalog {
                products,
                sub_criteria,
            } => format!(
                "Cannot rank an empty catalog ({} products, {} sub-criteria)",
                products, sub_criteria
            ),
            RankingError::ZeroWeightSum => {
                "Aggregation weights sum to zero; normalization is impossible".to_string()
            }
            RankingError::Catalog(err) => err.to_string(),
        }
    }
}

impl std::fmt::Display for RankingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RankingError {}

impl From<CatalogError> for RankingError {
    fn from(err: CatalogError) -> Self {
        RankingError::Catalog(err)
    }
}

impl From<RankingError> for DomainError {
    fn from(err: RankingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
