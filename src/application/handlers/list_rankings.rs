//! ListRankingsHandler - Query handler listing every archived result.

use std::sync::Arc;

use crate::domain::archive::RankingResult;
use crate::domain::foundation::DomainError;
use crate::ports::ResultArchive;

/// Handler listing all archived results.
pub struct ListRankingsHandler {
    archive: Arc<dyn ResultArchive>,
}

impl ListRankingsHandler {
    pub fn new(archive: Arc<dyn ResultArchive>) -> Self {
        Self { archive }
    }

    pub async fn handle(&self) -> Result<Vec<RankingResult>, DomainError> {
        Ok(self.archive.list_all().await?)
    }
}
