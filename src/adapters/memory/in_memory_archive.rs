//! In-Memory Result Archive Adapter
//!
//! Stores archived ranking results in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::archive::{ArchiveError, RankingResult};
use crate::domain::foundation::ResultId;
use crate::ports::ResultArchive;

/// In-memory archive keyed by run label.
///
/// The write lock makes `save` a single atomic check-and-insert, so two
/// concurrent writers for the same label cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultArchive {
    results: Arc<RwLock<HashMap<String, RankingResult>>>,
}

impl InMemoryResultArchive {
    /// Creates a new empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all stored results (useful for tests).
    pub async fn clear(&self) {
        self.results.write().await.clear();
    }

    /// Number of stored results.
    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    /// True when nothing is archived.
    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }
}

#[async_trait]
impl ResultArchive for InMemoryResultArchive {
    async fn save(&self, result: &RankingResult) -> Result<(), ArchiveError> {
        let mut results = self.results.write().await;
        if results.contains_key(&result.run_label) {
            return Err(ArchiveError::duplicate_run(&result.run_label));
        }
        results.insert(result.run_label.clone(), result.clone());
        Ok(())
    }

    async fn find_by_label(&self, label: &str) -> Result<Option<RankingResult>, ArchiveError> {
        let results = self.results.read().await;
        Ok(results.get(label).cloned())
    }

    async fn find_by_id(&self, id: &ResultId) -> Result<Option<RankingResult>, ArchiveError> {
        let results = self.results.read().await;
        Ok(results.values().find(|r| r.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<RankingResult>, ArchiveError> {
        let results = self.results.read().await;
        let mut all: Vec<RankingResult> = results.values().cloned().collect();
        all.sort_by(|a, b| a.run_label.cmp(&b.run_label));
        Ok(all)
    }

    async fn delete(&self, label: &str) -> Result<(), ArchiveError> {
        let mut results = self.results.write().await;
        results
            .remove(label)
            .map(|_| ())
            .ok_or_else(|| ArchiveError::not_found(label))
    }
}
