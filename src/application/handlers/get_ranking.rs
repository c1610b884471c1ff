//! GetRankingHandler - Query handler for archived results.

use std::sync::Arc;

use crate::domain::archive::{ArchiveError, RankingResult};
use crate::domain::foundation::{DomainError, ResultId};
use crate::ports::ResultArchive;

/// Handler retrieving archived results by run label or id.
pub struct GetRankingHandler {
    archive: Arc<dyn ResultArchive>,
}

impl GetRankingHandler {
    pub fn new(archive: Arc<dyn ResultArchive>) -> Self {
        Self { archive }
    }

    /// Finds the result archived under a run label, if any.
    pub async fn by_label(&self, label: &str) -> Result<Option<RankingResult>, DomainError> {
        Ok(self.archive.find_by_label(label).await?)
    }

    /// Fetches a result by id.
    ///
    /// # Errors
    ///
    /// - `ResultNotFound` when no result has the id
    pub async fn by_id(&self, id: &ResultId) -> Result<RankingResult, DomainError> {
        self.archive
            .find_by_id(id)
            .await?
            .ok_or_else(|| ArchiveError::not_found(id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryResultArchive;
    use crate::domain::archive::RankingRow;
    use crate::domain::foundation::ErrorCode;

    fn result(label: &str) -> RankingResult {
        RankingResult::new(
            label,
            "admin",
            "2024-06-30",
            vec![RankingRow::new(1, "Arabica", "Coffee", 0.5)],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn by_label_returns_the_archived_result() {
        let archive = Arc::new(InMemoryResultArchive::new());
        let stored = result("2024-06");
        archive.save(&stored).await.unwrap();

        let handler = GetRankingHandler::new(archive);
        let found = handler.by_label("2024-06").await.unwrap().unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn by_label_returns_none_when_absent() {
        let handler = GetRankingHandler::new(Arc::new(InMemoryResultArchive::new()));
        assert!(handler.by_label("2024-01").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn by_id_returns_the_archived_result() {
        let archive = Arc::new(InMemoryResultArchive::new());
        let stored = result("2024-06");
        archive.save(&stored).await.unwrap();

        let handler = GetRankingHandler::new(archive);
        let found = handler.by_id(&stored.id).await.unwrap();
        assert_eq!(found.run_label, "2024-06");
    }

    #[tokio::test]
    async fn by_id_fails_with_result_not_found() {
        let handler = GetRankingHandler::new(Arc::new(InMemoryResultArchive::new()));
        let err = handler.by_id(&ResultId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResultNotFound);
    }
}
