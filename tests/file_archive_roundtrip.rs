//! Integration tests for the file-backed result archive.
//!
//! Verifies that the JSON-file adapter honors the archive contract:
//! insert-if-absent saves, label/id lookup, listing, and deletion.

use std::sync::Arc;

use outranker::adapters::JsonFileResultArchive;
use outranker::application::{
    ArchiveRankingCommand, ArchiveRankingHandler, GetRankingHandler, RunCoordinator,
};
use outranker::domain::archive::{ArchiveError, RankingResult, RankingRow};
use outranker::domain::foundation::ErrorCode;
use outranker::ports::ResultArchive;

fn rows() -> Vec<RankingRow> {
    vec![
        RankingRow::new(1, "Product X", "Coffee", 1.0),
        RankingRow::new(2, "Product Y", "Coffee", 0.0),
        RankingRow::new(3, "Product Z", "Tea", -1.0),
    ]
}

#[tokio::test]
async fn archive_then_find_by_label_returns_equal_rows() {
    let dir = tempfile::tempdir().unwrap();
    let archive = JsonFileResultArchive::new(dir.path());

    let stored = RankingResult::new("2024-06", "admin", "2024-06-30", rows()).unwrap();
    archive.save(&stored).await.unwrap();

    let found = archive.find_by_label("2024-06").await.unwrap().unwrap();
    assert_eq!(found.rows, stored.rows);
    assert_eq!(found, stored);
}

#[tokio::test]
async fn results_survive_an_archive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let stored = RankingResult::new("2024-06", "admin", "2024-06-30", rows()).unwrap();
    {
        let archive = JsonFileResultArchive::new(dir.path());
        archive.save(&stored).await.unwrap();
    }

    // A fresh adapter over the same directory sees the persisted result.
    let reopened = JsonFileResultArchive::new(dir.path());
    let found = reopened.find_by_label("2024-06").await.unwrap().unwrap();
    assert_eq!(found, stored);

    let by_id = reopened.find_by_id(&stored.id).await.unwrap().unwrap();
    assert_eq!(by_id.run_label, "2024-06");
}

#[tokio::test]
async fn duplicate_label_across_reopens_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    {
        let archive = JsonFileResultArchive::new(dir.path());
        let first = RankingResult::new("2024-06", "admin", "2024-06-30", rows()).unwrap();
        archive.save(&first).await.unwrap();
    }

    let reopened = JsonFileResultArchive::new(dir.path());
    let second = RankingResult::new("2024-06", "intruder", "2024-07-01", rows()).unwrap();
    let err = reopened.save(&second).await.unwrap_err();
    assert!(matches!(err, ArchiveError::DuplicateRun { .. }));

    let kept = reopened.find_by_label("2024-06").await.unwrap().unwrap();
    assert_eq!(kept.created_by, "admin");
}

#[tokio::test]
async fn archive_handler_over_file_store_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let archive: Arc<dyn ResultArchive> = Arc::new(JsonFileResultArchive::new(dir.path()));

    let handler = ArchiveRankingHandler::new(archive.clone(), Arc::new(RunCoordinator::new()));
    let archived = handler
        .handle(ArchiveRankingCommand {
            run_label: "2024-06".into(),
            created_by: "admin".into(),
            created_date: "2024-06-30".into(),
            rows: rows(),
        })
        .await
        .unwrap();

    let queries = GetRankingHandler::new(archive);
    let by_label = queries.by_label("2024-06").await.unwrap().unwrap();
    assert_eq!(by_label.rows, archived.rows);

    let by_id = queries.by_id(&archived.id).await.unwrap();
    assert_eq!(by_id, by_label);
}

#[tokio::test]
async fn delete_then_archive_accepts_the_label_again() {
    let dir = tempfile::tempdir().unwrap();
    let archive = JsonFileResultArchive::new(dir.path());

    let first = RankingResult::new("2024-06", "admin", "2024-06-30", rows()).unwrap();
    archive.save(&first).await.unwrap();
    archive.delete("2024-06").await.unwrap();

    let second = RankingResult::new("2024-06", "admin", "2024-07-01", rows()).unwrap();
    archive.save(&second).await.unwrap();

    let found = archive.find_by_label("2024-06").await.unwrap().unwrap();
    assert_eq!(found.created_date, "2024-07-01");
}

#[tokio::test]
async fn listing_returns_labels_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let archive = JsonFileResultArchive::new(dir.path());

    for label in ["2024-09", "2024-07", "2024-08"] {
        let result = RankingResult::new(label, "admin", "2024-09-30", rows()).unwrap();
        archive.save(&result).await.unwrap();
    }

    let all = archive.list_all().await.unwrap();
    let labels: Vec<&str> = all.iter().map(|r| r.run_label.as_str()).collect();
    assert_eq!(labels, vec!["2024-07", "2024-08", "2024-09"]);
}

#[tokio::test]
async fn deleting_an_unknown_label_is_result_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let archive = JsonFileResultArchive::new(dir.path());

    let err = archive.delete("2030-01").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ResultNotFound);
}
