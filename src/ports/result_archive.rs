//! Result archive port (write side).
//!
//! Defines the contract for persisting and retrieving archived ranking
//! results. One result per run label; results are immutable once stored.

use async_trait::async_trait;

use crate::domain::archive::{ArchiveError, RankingResult};
use crate::domain::foundation::ResultId;

/// Persistence port for archived ranking results.
///
/// Implementations must make `save` an atomic insert-if-absent on the run
/// label: a lost race surfaces as `DuplicateRun`, never as an overwrite.
/// There is no separate exists-then-insert sequence to race against.
#[async_trait]
pub trait ResultArchive: Send + Sync {
    /// Stores a result under its run label.
    ///
    /// # Errors
    ///
    /// - `DuplicateRun` if a result already exists for the label
    /// - `Storage` on persistence failure
    async fn save(&self, result: &RankingResult) -> Result<(), ArchiveError>;

    /// Finds a result by run label. Returns `None` if absent.
    async fn find_by_label(&self, label: &str) -> Result<Option<RankingResult>, ArchiveError>;

    /// Finds a result by id. Returns `None` if absent.
    async fn find_by_id(&self, id: &ResultId) -> Result<Option<RankingResult>, ArchiveError>;

    /// Lists all archived results.
    async fn list_all(&self) -> Result<Vec<RankingResult>, ArchiveError>;

    /// Deletes the result stored under a run label.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no result exists for the label
    /// - `Storage` on persistence failure
    async fn delete(&self, label: &str) -> Result<(), ArchiveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_archive_is_object_safe() {
        fn _accepts_dyn(_archive: &dyn ResultArchive) {}
    }
}
