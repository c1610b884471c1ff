//! ArchiveRankingHandler - Command handler archiving a computed ranking.

use std::sync::Arc;
use tracing::info;

use crate::application::RunCoordinator;
use crate::domain::archive::{RankingResult, RankingRow};
use crate::domain::foundation::DomainError;
use crate::ports::ResultArchive;

/// Command to archive ranking rows under a run label.
#[derive(Debug, Clone)]
pub struct ArchiveRankingCommand {
    pub run_label: String,
    pub created_by: String,
    pub created_date: String,
    pub rows: Vec<RankingRow>,
}

/// Handler persisting one ranking result per run label.
pub struct ArchiveRankingHandler {
    archive: Arc<dyn ResultArchive>,
    coordinator: Arc<RunCoordinator>,
}

impl ArchiveRankingHandler {
    pub fn new(archive: Arc<dyn ResultArchive>, coordinator: Arc<RunCoordinator>) -> Self {
        Self {
            archive,
            coordinator,
        }
    }

    pub async fn handle(&self, cmd: ArchiveRankingCommand) -> Result<RankingResult, DomainError> {
        // Serialize writers per label; the archive's insert-if-absent still
        // guards against writers outside this process.
        let _guard = self.coordinator.acquire(&cmd.run_label).await;

        let result = RankingResult::new(cmd.run_label, cmd.created_by, cmd.created_date, cmd.rows)?;
        self.archive.save(&result).await?;

        info!(
            run_label = %result.run_label,
            rows = result.rows.len(),
            "Ranking archived"
        );

        Ok(result)
    }
}
