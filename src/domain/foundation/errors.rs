//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a number, got '{actual}'")]
    NotANumber { field: String, actual: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a not-a-number validation error.
    pub fn not_a_number(field: impl Into<String>, actual: impl Into<String>) -> Self {
        ValidationError::NotANumber {
            field: field.into(),
            actual: actual.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,

    // Catalog errors
    CatalogInvalid,
    EmptyCatalog,

    // Ranking computation errors
    IncompleteAssignment,
    MalformedWeight,
    InvalidThreshold,

    // Archive errors
    DuplicateRun,
    ResultNotFound,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::CatalogInvalid => "CATALOG_INVALID",
            ErrorCode::EmptyCatalog => "EMPTY_CATALOG",
            ErrorCode::IncompleteAssignment => "INCOMPLETE_ASSIGNMENT",
            ErrorCode::MalformedWeight => "MALFORMED_WEIGHT",
            ErrorCode::InvalidThreshold => "INVALID_THRESHOLD",
            ErrorCode::DuplicateRun => "DUPLICATE_RUN",
            ErrorCode::ResultNotFound => "RESULT_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::NotANumber { .. } => ErrorCode::InvalidFormat,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("run_label");
        assert_eq!(format!("{}", err), "Field 'run_label' cannot be empty");
    }

    #[test]
    fn validation_error_not_a_number_displays_correctly() {
        let err = ValidationError::not_a_number("nilai_bobot", "abc");
        assert_eq!(
            format!("{}", err),
            "Field 'nilai_bobot' must be a number, got 'abc'"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DuplicateRun, "Run already archived");
        assert_eq!(format!("{}", err), "[DUPLICATE_RUN] Run already archived");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::IncompleteAssignment, "Missing weight")
            .with_detail("product", "prod-1")
            .with_detail("sub_criterion", "sub-2");

        assert_eq!(err.details.get("product"), Some(&"prod-1".to_string()));
        assert_eq!(err.details.get("sub_criterion"), Some(&"sub-2".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::EmptyCatalog), "EMPTY_CATALOG");
        assert_eq!(format!("{}", ErrorCode::MalformedWeight), "MALFORMED_WEIGHT");
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::empty_field("name").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
