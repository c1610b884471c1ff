//! DeleteRankingHandler - Command handler removing an archived result.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::DomainError;
use crate::ports::ResultArchive;

/// Handler deleting the result archived under a run label.
///
/// Deletion is the only way to make room for a re-computation of the same
/// label; archived results are never overwritten in place.
pub struct DeleteRankingHandler {
    archive: Arc<dyn ResultArchive>,
}

impl DeleteRankingHandler {
    pub fn new(archive: Arc<dyn ResultArchive>) -> Self {
        Self { archive }
    }

    pub async fn handle(&self, label: &str) -> Result<(), DomainError> {
        self.archive.delete(label).await?;
        info!(run_label = %label, "Archived ranking deleted");
        Ok(())
    }
}
