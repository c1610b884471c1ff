//! Ranking module - The PROMETHEE II outranking computation.
//!
//! A pure, single-pass transformation pipeline with no persisted
//! intermediate state:
//!
//! 1. `WeightResolver` turns a catalog snapshot into a dense score table
//! 2. `PreferenceFunction` maps score differences to preference degrees
//! 3. `OutrankingEngine` aggregates degrees into the outranking matrix
//! 4. `FlowAggregator` reduces the matrix to net flows and a ranking
//!
//! `RankingEngine` is the facade callers use.

mod engine;
mod errors;
mod flow;
mod outranking;
mod preference;
mod resolver;

pub use engine::{RankingEngine, RankingOutcome};
pub use errors::RankingError;
pub use flow::{FlowAggregator, Flows, RankedProduct};
pub use outranking::{OutrankingEngine, OutrankingMatrix, WeightNormalization};
pub use preference::PreferenceFunction;
pub use resolver::{ScoreTable, WeightResolver};
