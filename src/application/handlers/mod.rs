//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations:
//! compute a ranking, archive it under a run label, and manage archived
//! results (get, list, delete).

mod archive_ranking;
mod compute_ranking;
mod delete_ranking;
mod get_ranking;
mod list_rankings;

pub use archive_ranking::{ArchiveRankingCommand, ArchiveRankingHandler};
pub use compute_ranking::ComputeRankingHandler;
pub use delete_ranking::DeleteRankingHandler;
pub use get_ranking::GetRankingHandler;
pub use list_rankings::ListRankingsHandler;
