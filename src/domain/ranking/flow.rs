//! Flow Aggregator - reduces the outranking matrix to flows and a ranking.

use std::cmp::Ordering;

use super::OutrankingMatrix;

/// Leaving, entering, and net flows per product, indexed in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Flows {
    leaving: Vec<f64>,
    entering: Vec<f64>,
    net: Vec<f64>,
}

impl Flows {
    /// Leaving flow `φ+` of the product at `index`.
    pub fn leaving(&self, index: usize) -> f64 {
        self.leaving[index]
    }

    /// Entering flow `φ-` of the product at `index`.
    pub fn entering(&self, index: usize) -> f64 {
        self.entering[index]
    }

    /// Net flow `φ = φ+ - φ-` of the product at `index`.
    pub fn net(&self, index: usize) -> f64 {
        self.net[index]
    }

    /// All net flows in catalog order.
    pub fn net_flows(&self) -> &[f64] {
        &self.net
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.net.len()
    }

    /// True when there are no products.
    pub fn is_empty(&self) -> bool {
        self.net.is_empty()
    }
}

/// A product's place in the final ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedProduct {
    /// 1-based rank; ties consume distinct ranks (stable-sort semantics).
    pub rank: u32,
    /// Index of the product in catalog order.
    pub product_index: usize,
    pub net_flow: f64,
}

/// Computes PROMETHEE II flows and the final ranking.
pub struct FlowAggregator;

impl FlowAggregator {
    /// Computes leaving, entering, and net flows from the matrix.
    ///
    /// `φ+(a) = Σ_b Π(a,b) / (n-1)` and `φ-(a) = Σ_b Π(b,a) / (n-1)`.
    /// With a single product there are no pairs and every flow is 0.
    pub fn aggregate(matrix: &OutrankingMatrix) -> Flows {
        let n = matrix.size();
        let mut leaving = vec![0.0; n];
        let mut entering = vec![0.0; n];

        if n > 1 {
            let divisor = (n - 1) as f64;
            for a in 0..n {
                for b in 0..n {
                    if a == b {
                        continue;
                    }
                    leaving[a] += matrix.index(a, b);
                    entering[a] += matrix.index(b, a);
                }
                leaving[a] /= divisor;
                entering[a] /= divisor;
            }
        }

        let net = leaving
            .iter()
            .zip(&entering)
            .map(|(l, e)| l - e)
            .collect();

        Flows {
            leaving,
            entering,
            net,
        }
    }

    /// Ranks products descending by net flow.
    ///
    /// The sort is stable, so products with equal net flows keep their
    /// catalog insertion order; ranks are the 1-based positions after the
    /// sort. PROMETHEE II leaves the tie-break unspecified, so this rule is
    /// the documented, deterministic choice.
    pub fn rank(flows: &Flows) -> Vec<RankedProduct> {
        let mut order: Vec<usize> = (0..flows.len()).collect();
        order.sort_by(|&a, &b| {
            flows
                .net(b)
                .partial_cmp(&flows.net(a))
                .unwrap_or(Ordering::Equal)
        });

        order
            .into_iter()
            .enumerate()
            .map(|(position, product_index)| RankedProduct {
                rank: (position + 1) as u32,
                product_index,
                net_flow: flows.net(product_index),
            })
            .collect()
    }
}
