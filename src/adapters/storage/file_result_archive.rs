//! JSON File Result Archive Adapter
//!
//! Stores one JSON file per archived run label under a data directory.
//! Uses a write-to-temp-then-rename pattern so a result file is either
//! complete or absent, never partial.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::archive::{ArchiveError, RankingResult};
use crate::domain::foundation::ResultId;
use crate::ports::ResultArchive;

/// File-per-label archive rooted at a data directory.
///
/// Run labels become file names through a conservative character mapping;
/// the label stored inside the file stays authoritative. A mutex makes the
/// exists-check-plus-write in `save` a single atomic step for this process.
#[derive(Debug)]
pub struct JsonFileResultArchive {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileResultArchive {
    /// Creates an archive rooted at the given directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn result_path(&self, label: &str) -> PathBuf {
        self.data_dir.join(format!("result_{}.json", sanitize(label)))
    }

    fn temp_path(&self, label: &str) -> PathBuf {
        self.data_dir
            .join(format!("result_{}.json.tmp", sanitize(label)))
    }

    async fn read_result(&self, path: &PathBuf) -> Result<RankingResult, ArchiveError> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| ArchiveError::storage(format!("read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| ArchiveError::storage(format!("parse {}: {}", path.display(), e)))
    }
}

fn sanitize(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl ResultArchive for JsonFileResultArchive {
    async fn save(&self, result: &RankingResult) -> Result<(), ArchiveError> {
        let _guard = self.write_lock.lock().await;

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| ArchiveError::storage(format!("create data dir: {}", e)))?;

        let path = self.result_path(&result.run_label);
        match fs::try_exists(&path).await {
            Ok(true) => return Err(ArchiveError::duplicate_run(&result.run_label)),
            Ok(false) => {}
            Err(e) => return Err(ArchiveError::storage(format!("stat {}: {}", path.display(), e))),
        }

        let json = serde_json::to_string_pretty(result)
            .map_err(|e| ArchiveError::storage(format!("serialize result: {}", e)))?;

        let temp = self.temp_path(&result.run_label);
        fs::write(&temp, json)
            .await
            .map_err(|e| ArchiveError::storage(format!("write {}: {}", temp.display(), e)))?;
        fs::rename(&temp, &path)
            .await
            .map_err(|e| ArchiveError::storage(format!("rename {}: {}", path.display(), e)))?;

        Ok(())
    }

    async fn find_by_label(&self, label: &str) -> Result<Option<RankingResult>, ArchiveError> {
        let path = self.result_path(label);
        match fs::try_exists(&path).await {
            Ok(true) => {}
            Ok(false) => return Ok(None),
            Err(e) => return Err(ArchiveError::storage(format!("stat {}: {}", path.display(), e))),
        }

        let result = self.read_result(&path).await?;
        if result.run_label == label {
            Ok(Some(result))
        } else {
            Ok(None)
        }
    }

    async fn find_by_id(&self, id: &ResultId) -> Result<Option<RankingResult>, ArchiveError> {
        for result in self.list_all().await? {
            if result.id == *id {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<RankingResult>, ArchiveError> {
        let mut entries = match fs::read_dir(&self.data_dir).await {
            Ok(entries) => entries,
            // No directory yet means nothing was ever archived.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ArchiveError::storage(format!("read data dir: {}", e))),
        };

        let mut results = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ArchiveError::storage(format!("read data dir: {}", e)))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            results.push(self.read_result(&path).await?);
        }

        results.sort_by(|a, b| a.run_label.cmp(&b.run_label));
        Ok(results)
    }

    async fn delete(&self, label: &str) -> Result<(), ArchiveError> {
        let path = self.result_path(label);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ArchiveError::not_found(label))
            }
            Err(e) => Err(ArchiveError::storage(format!(
                "delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
