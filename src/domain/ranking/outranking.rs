//! Pairwise Outranking Engine - aggregated preference indices per pair.

use crate::domain::catalog::CatalogSnapshot;

use super::{PreferenceFunction, RankingError, ScoreTable};

/// Square matrix of aggregated preference indices over products.
///
/// `index(a, b)` is the degree to which product `a` outranks product `b`,
/// in `[0, 1]`. The diagonal is stored as 0 and excluded from every flow
/// computation.
#[derive(Debug, Clone, PartialEq)]
pub struct OutrankingMatrix {
    size: usize,
    /// Row-major values.
    values: Vec<f64>,
}

impl OutrankingMatrix {
    fn zeroed(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Number of products the matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Aggregated preference index of product `a` over product `b`.
    pub fn index(&self, a: usize, b: usize) -> f64 {
        self.values[a * self.size + b]
    }

    fn set(&mut self, a: usize, b: usize, value: f64) {
        self.values[a * self.size + b] = value;
    }
}

/// Normalization applied to the catalog's aggregation weights.
///
/// Reported alongside the matrix so callers can audit the factor that was
/// multiplied into every index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightNormalization {
    /// Sum of the raw aggregation weights.
    pub raw_sum: f64,
    /// Factor each weight was multiplied by (`1 / raw_sum`).
    pub factor: f64,
}

impl WeightNormalization {
    /// True when the raw weights already summed to 1 within `tolerance`.
    pub fn is_identity(&self, tolerance: f64) -> bool {
        (self.raw_sum - 1.0).abs() <= tolerance
    }
}

/// Builds the outranking matrix from resolved scores.
pub struct OutrankingEngine;

impl OutrankingEngine {
    /// Computes `Π(a,b) = Σ_c w_c · π_c(a,b)` for every ordered pair of
    /// distinct products.
    ///
    /// Aggregation weights are normalized to sum 1 before use. Each matrix
    /// row depends only on the immutable score table, so rows can be
    /// computed independently if a caller wants to parallelize.
    ///
    /// # Errors
    ///
    /// - `InvalidThreshold` from preference function construction
    /// - `ZeroWeightSum` when every aggregation weight is zero
    pub fn build(
        snapshot: &CatalogSnapshot,
        scores: &ScoreTable,
    ) -> Result<(OutrankingMatrix, WeightNormalization), RankingError> {
        let subs = snapshot.sub_criteria();

        let mut functions = Vec::with_capacity(subs.len());
        for sub in subs {
            functions.push(PreferenceFunction::for_sub_criterion(sub)?);
        }

        let raw_sum: f64 = subs.iter().map(|s| s.weight).sum();
        if raw_sum <= 0.0 {
            return Err(RankingError::ZeroWeightSum);
        }
        let factor = 1.0 / raw_sum;
        let normalization = WeightNormalization { raw_sum, factor };

        let weights: Vec<f64> = subs.iter().map(|s| s.weight * factor).collect();

        let n = scores.product_count();
        let mut matrix = OutrankingMatrix::zeroed(n);

        for a in 0..n {
            for b in 0..n {
                if a == b {
                    continue;
                }
                let mut index = 0.0;
                for (c, sub) in subs.iter().enumerate() {
                    let d = sub
                        .direction
                        .signed_difference(scores.score(a, c), scores.score(b, c));
                    index += weights[c] * functions[c].degree(d);
                }
                matrix.set(a, b, index);
            }
        }

        Ok((matrix, normalization))
    }
}
