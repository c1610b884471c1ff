//! In-Memory Catalog Provider Adapter
//!
//! Serves a fixed set of catalog records.
//! Useful for testing and development.

use async_trait::async_trait;

use crate::domain::catalog::CatalogRecords;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogProvider;

/// Catalog provider over a fixed record set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogProvider {
    records: CatalogRecords,
}

impl InMemoryCatalogProvider {
    /// Creates a provider serving the given records.
    pub fn new(records: CatalogRecords) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalogProvider {
    async fn fetch(&self) -> Result<CatalogRecords, DomainError> {
        Ok(self.records.clone())
    }
}
