//! RankingEngine - facade over the full outranking pipeline.

use crate::domain::archive::RankingRow;
use crate::domain::catalog::CatalogSnapshot;

use super::{
    FlowAggregator, Flows, OutrankingEngine, OutrankingMatrix, RankingError, WeightNormalization,
    WeightResolver,
};

/// Everything one ranking run produces.
///
/// Only `rows` is ever persisted; the matrix, flows, and normalization
/// record are exposed for auditing callers and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    pub rows: Vec<RankingRow>,
    pub matrix: OutrankingMatrix,
    pub flows: Flows,
    pub normalization: WeightNormalization,
}

/// The complete PROMETHEE II computation over a catalog snapshot.
pub struct RankingEngine;

impl RankingEngine {
    /// Computes the ranking for a snapshot.
    ///
    /// Pure and deterministic: the same snapshot always yields bit-identical
    /// rows. All failures abort the run; no partial ranking is returned.
    ///
    /// # Errors
    ///
    /// - `EmptyCatalog` with zero products or zero sub-criteria
    /// - any `RankingError` from resolution, preference construction, or
    ///   matrix aggregation
    pub fn compute(snapshot: &CatalogSnapshot) -> Result<RankingOutcome, RankingError> {
        if snapshot.product_count() == 0 || snapshot.sub_criterion_count() == 0 {
            return Err(RankingError::EmptyCatalog {
                products: snapshot.product_count(),
                sub_criteria: snapshot.sub_criterion_count(),
            });
        }

        let scores = WeightResolver::resolve(snapshot)?;
        let (matrix, normalization) = OutrankingEngine::build(snapshot, &scores)?;
        let flows = FlowAggregator::aggregate(&matrix);
        let ranking = FlowAggregator::rank(&flows);

        let products = snapshot.products();
        let rows = ranking
            .into_iter()
            .map(|ranked| {
                let product = &products[ranked.product_index];
                RankingRow::new(
                    ranked.rank,
                    product.name.clone(),
                    product.category.clone(),
                    ranked.net_flow,
                )
            })
            .collect();

        Ok(RankingOutcome {
            rows,
            matrix,
            flows,
            normalization,
        })
    }
}
