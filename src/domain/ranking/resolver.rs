//! Weight Resolver - turns a catalog snapshot into a dense score table.

use crate::domain::catalog::CatalogSnapshot;
use crate::domain::foundation::{ProductId, SubCriterionId};

use super::RankingError;

/// Scores for every (product, sub-criterion) pair, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    products: Vec<ProductId>,
    sub_criteria: Vec<SubCriterionId>,
    /// Row-per-product, column-per-sub-criterion.
    scores: Vec<Vec<f64>>,
}

impl ScoreTable {
    /// Product ids in catalog order.
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// Sub-criterion ids in catalog order.
    pub fn sub_criteria(&self) -> &[SubCriterionId] {
        &self.sub_criteria
    }

    /// Score of a product (by row index) on a sub-criterion (by column index).
    pub fn score(&self, product_idx: usize, sub_idx: usize) -> f64 {
        self.scores[product_idx][sub_idx]
    }

    /// Number of products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Resolves each product's assigned weights into numeric scores.
pub struct WeightResolver;

impl WeightResolver {
    /// Builds the score table for a snapshot.
    ///
    /// For each sub-criterion the product must have exactly one assigned
    /// weight; the score is that weight's parsed value. Missing assignments
    /// abort the run rather than defaulting to zero, because an implicit
    /// zero would distort every pairwise difference the product appears in.
    ///
    /// # Errors
    ///
    /// - `IncompleteAssignment` when a product lacks a weight for a
    ///   catalog sub-criterion
    /// - `MalformedWeight` when an assigned value does not parse as a
    ///   finite number
    pub fn resolve(snapshot: &CatalogSnapshot) -> Result<ScoreTable, RankingError> {
        let sub_criteria: Vec<SubCriterionId> =
            snapshot.sub_criteria().iter().map(|s| s.id.clone()).collect();

        let mut products = Vec::with_capacity(snapshot.product_count());
        let mut scores = Vec::with_capacity(snapshot.product_count());

        for product in snapshot.products() {
            let mut row = Vec::with_capacity(sub_criteria.len());
            for sub_id in &sub_criteria {
                let weight = snapshot
                    .assigned_weight(&product.id, sub_id)
                    .ok_or_else(|| {
                        RankingError::incomplete_assignment(product.id.clone(), sub_id.clone())
                    })?;
                let value = weight.numeric_value().ok_or_else(|| {
                    RankingError::malformed_weight(weight.id.clone(), weight.value.clone())
                })?;
                row.push(value);
            }
            products.push(product.id.clone());
            scores.push(row);
        }

        Ok(ScoreTable {
            products,
            sub_criteria,
            scores,
        })
    }
}
