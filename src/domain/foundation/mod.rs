//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Outranker domain.

mod direction;
mod errors;
mod ids;
mod preference_type;
mod timestamp;

pub use direction::Direction;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CriterionId, ProductId, ResultId, SubCriterionId, WeightId};
pub use preference_type::PreferenceType;
pub use timestamp::Timestamp;
