//! ComputeRankingHandler - Query handler producing a fresh ranking.

use std::sync::Arc;
use tracing::info;

use crate::domain::catalog::CatalogSnapshot;
use crate::domain::foundation::DomainError;
use crate::domain::ranking::{RankingEngine, RankingError, RankingOutcome};
use crate::ports::CatalogProvider;

/// Weight sums within this distance of 1 are treated as already normalized.
const DEFAULT_WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Handler computing a ranking from the current catalog.
///
/// All inputs are resolved upfront into in-memory records; the computation
/// itself is pure and side-effect free.
pub struct ComputeRankingHandler {
    catalog: Arc<dyn CatalogProvider>,
    weight_sum_tolerance: f64,
}

impl ComputeRankingHandler {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog,
            weight_sum_tolerance: DEFAULT_WEIGHT_SUM_TOLERANCE,
        }
    }

    /// Overrides the tolerance below which weight normalization is
    /// considered a no-op.
    pub fn with_weight_sum_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_sum_tolerance = tolerance;
        self
    }

    pub async fn handle(&self) -> Result<RankingOutcome, DomainError> {
        let records = self.catalog.fetch().await?;
        let snapshot = CatalogSnapshot::assemble(records).map_err(RankingError::from)?;

        info!(
            products = snapshot.product_count(),
            sub_criteria = snapshot.sub_criterion_count(),
            "Computing ranking"
        );

        let outcome = RankingEngine::compute(&snapshot)?;

        if !outcome.normalization.is_identity(self.weight_sum_tolerance) {
            info!(
                raw_sum = outcome.normalization.raw_sum,
                factor = outcome.normalization.factor,
                "Normalized aggregation weights"
            );
        }
        info!(rows = outcome.rows.len(), "Ranking computed");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCatalogProvider;
    use crate::domain::catalog::{
        AssignmentRecord, CatalogRecords, CriterionRecord, ProductRecord, SubCriterionRecord,
        WeightRecord,
    };
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;

    struct FailingCatalogProvider;

    #[async_trait]
    impl CatalogProvider for FailingCatalogProvider {
        async fn fetch(&self) -> Result<CatalogRecords, DomainError> {
            Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated fetch failure",
            ))
        }
    }

    fn linear_sub(id: &str) -> SubCriterionRecord {
        SubCriterionRecord {
            id: id.into(),
            criterion_id: "c1".into(),
            name: "Score".into(),
            preference_type: "linear".into(),
            direction: "max".into(),
            weight: None,
            p: Some("10".into()),
            q: None,
            s: None,
        }
    }

    fn scenario_records() -> CatalogRecords {
        CatalogRecords {
            products: vec![
                ProductRecord {
                    id: "X".into(),
                    name: "Product X".into(),
                    category: "Coffee".into(),
                },
                ProductRecord {
                    id: "Y".into(),
                    name: "Product Y".into(),
                    category: "Coffee".into(),
                },
                ProductRecord {
                    id: "Z".into(),
                    name: "Product Z".into(),
                    category: "Tea".into(),
                },
            ],
            criteria: vec![CriterionRecord {
                id: "c1".into(),
                name: "Quality".into(),
            }],
            sub_criteria: vec![linear_sub("s1")],
            weights: vec![
                WeightRecord {
                    id: "wx".into(),
                    sub_criterion_id: "s1".into(),
                    label: "x".into(),
                    value: "50".into(),
                },
                WeightRecord {
                    id: "wy".into(),
                    sub_criterion_id: "s1".into(),
                    label: "y".into(),
                    value: "40".into(),
                },
                WeightRecord {
                    id: "wz".into(),
                    sub_criterion_id: "s1".into(),
                    label: "z".into(),
                    value: "30".into(),
                },
            ],
            assignments: vec![
                AssignmentRecord {
                    product_id: "X".into(),
                    weight_ids: vec!["wx".into()],
                },
                AssignmentRecord {
                    product_id: "Y".into(),
                    weight_ids: vec!["wy".into()],
                },
                AssignmentRecord {
                    product_id: "Z".into(),
                    weight_ids: vec!["wz".into()],
                },
            ],
        }
    }

    #[tokio::test]
    async fn computes_ranking_from_provider_records() {
        let provider = Arc::new(InMemoryCatalogProvider::new(scenario_records()));
        let handler = ComputeRankingHandler::new(provider);

        let outcome = handler.handle().await.unwrap();

        let names: Vec<&str> = outcome.rows.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(names, vec!["Product X", "Product Y", "Product Z"]);
        assert!((outcome.rows[0].net_flow - 1.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn repeated_runs_yield_identical_rows() {
        let provider = Arc::new(InMemoryCatalogProvider::new(scenario_records()));
        let handler = ComputeRankingHandler::new(provider);

        let first = handler.handle().await.unwrap();
        let second = handler.handle().await.unwrap();
        assert_eq!(first.rows, second.rows);
    }

    #[tokio::test]
    async fn empty_catalog_surfaces_empty_catalog_error() {
        let provider = Arc::new(InMemoryCatalogProvider::default());
        let handler = ComputeRankingHandler::new(provider);

        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCatalog);
    }

    #[tokio::test]
    async fn missing_assignment_surfaces_incomplete_assignment() {
        let mut records = scenario_records();
        records.sub_criteria.push(linear_sub("s2"));
        // No product has a weight for s2.
        let provider = Arc::new(InMemoryCatalogProvider::new(records));
        let handler = ComputeRankingHandler::new(provider);

        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteAssignment);
    }

    #[tokio::test]
    async fn provider_failure_is_propagated() {
        let handler = ComputeRankingHandler::new(Arc::new(FailingCatalogProvider));
        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn invalid_records_surface_catalog_invalid() {
        let mut records = scenario_records();
        records.sub_criteria[0].preference_type = "quadratic".into();
        let provider = Arc::new(InMemoryCatalogProvider::new(records));
        let handler = ComputeRankingHandler::new(provider);

        let err = handler.handle().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
    }
}
