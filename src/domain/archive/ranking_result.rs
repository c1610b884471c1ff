//! RankingResult - an archived ranking run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ResultId, ValidationError};

/// One row of an archived ranking.
///
/// Field names and order match the persisted result shape exactly; the
/// category field keeps its historical spelling on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub rank: u32,
    pub product: String,
    pub kategori: String,
    #[serde(rename = "netFlow")]
    pub net_flow: f64,
}

impl RankingRow {
    /// Creates a new ranking row.
    pub fn new(
        rank: u32,
        product: impl Into<String>,
        kategori: impl Into<String>,
        net_flow: f64,
    ) -> Self {
        Self {
            rank,
            product: product.into(),
            kategori: kategori.into(),
            net_flow,
        }
    }
}

/// An immutable snapshot of one ranking run, unique per run label.
///
/// The storage id precedes the four domain fields, which keep their exact
/// persisted names and order: `runLabel`, `createdBy`, `createdDate`,
/// `rows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub id: ResultId,
    #[serde(rename = "runLabel")]
    pub run_label: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    pub rows: Vec<RankingRow>,
}

impl RankingResult {
    /// Creates a new result with a fresh id.
    ///
    /// # Errors
    ///
    /// `ValidationError` when the run label or creator is empty.
    pub fn new(
        run_label: impl Into<String>,
        created_by: impl Into<String>,
        created_date: impl Into<String>,
        rows: Vec<RankingRow>,
    ) -> Result<Self, ValidationError> {
        let run_label = run_label.into();
        if run_label.is_empty() {
            return Err(ValidationError::empty_field("run_label"));
        }
        let created_by = created_by.into();
        if created_by.is_empty() {
            return Err(ValidationError::empty_field("created_by"));
        }
        Ok(Self {
            id: ResultId::new(),
            run_label,
            created_by,
            created_date: created_date.into(),
            rows,
        })
    }
}
