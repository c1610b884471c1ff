//! Catalog provider port (read side).
//!
//! Supplies the raw record collections one ranking run consumes. The join
//! into a typed snapshot happens in application code, never in the
//! provider's storage layer.

use async_trait::async_trait;

use crate::domain::catalog::CatalogRecords;
use crate::domain::foundation::DomainError;

/// Source of catalog records.
///
/// Implementations resolve everything upfront; the ranking computation
/// itself never blocks on I/O.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches the current catalog records.
    ///
    /// # Errors
    ///
    /// - `StorageError` when the underlying source fails
    async fn fetch(&self) -> Result<CatalogRecords, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn CatalogProvider) {}
    }
}
