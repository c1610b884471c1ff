//! JSON Catalog Provider Adapter
//!
//! Reads catalog records from a single JSON file. This is the CLI's input
//! path; a deployment against a live store would supply its own provider.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::domain::catalog::CatalogRecords;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CatalogProvider;

/// Catalog provider reading a `CatalogRecords` JSON document from disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    /// Creates a provider for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalogProvider {
    async fn fetch(&self) -> Result<CatalogRecords, DomainError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Cannot read catalog file {}: {}", self.path.display(), e),
            )
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Catalog file {} is not valid: {}", self.path.display(), e),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn fetch_parses_a_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": [{{"id": "p1", "name": "Arabica", "category": "Coffee"}}]}}"#
        )
        .unwrap();

        let provider = JsonCatalogProvider::new(file.path());
        let records = provider.fetch().await.unwrap();

        assert_eq!(records.products.len(), 1);
        assert_eq!(records.products[0].name, "Arabica");
    }

    #[tokio::test]
    async fn missing_file_is_a_storage_error() {
        let provider = JsonCatalogProvider::new("/nonexistent/catalog.json");
        let err = provider.fetch().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn malformed_json_is_an_invalid_format_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let provider = JsonCatalogProvider::new(file.path());
        let err = provider.fetch().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
