//! Archive-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by result archive operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    /// A result already exists under the run label.
    DuplicateRun { label: String },
    /// No result matched the label or id.
    NotFound { key: String },
    /// Underlying storage failed.
    Storage(String),
}

impl ArchiveError {
    pub fn duplicate_run(label: impl Into<String>) -> Self {
        ArchiveError::DuplicateRun {
            label: label.into(),
        }
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        ArchiveError::NotFound { key: key.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        ArchiveError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ArchiveError::DuplicateRun { .. } => ErrorCode::DuplicateRun,
            ArchiveError::NotFound { .. } => ErrorCode::ResultNotFound,
            ArchiveError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ArchiveError::DuplicateRun { label } => format!(
                "A ranking for '{}' is already archived; delete it before storing a new computation",
                label
            ),
            ArchiveError::NotFound { key } => format!("No archived ranking found for '{}'", key),
            ArchiveError::Storage(msg) => format!("Archive storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ArchiveError {}

impl From<ArchiveError> for DomainError {
    fn from(err: ArchiveError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_run_tells_caller_to_delete_first() {
        let err = ArchiveError::duplicate_run("2024-06");
        assert!(err.message().contains("2024-06"));
        assert!(err.message().contains("delete"));
        assert_eq!(err.code(), ErrorCode::DuplicateRun);
    }

    #[test]
    fn not_found_maps_to_result_not_found() {
        let err = ArchiveError::not_found("2024-07");
        assert_eq!(err.code(), ErrorCode::ResultNotFound);
    }

    #[test]
    fn archive_error_converts_to_domain_error() {
        let err: DomainError = ArchiveError::storage("disk full").into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }
}
