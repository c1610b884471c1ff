//! Archive module - Archived ranking results.
//!
//! `RankingResult` is the only persisted computation output: one immutable
//! snapshot per run label, retained until explicit deletion.

mod errors;
mod ranking_result;

pub use errors::ArchiveError;
pub use ranking_result::{RankingResult, RankingRow};
