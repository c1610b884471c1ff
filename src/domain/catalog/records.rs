//! Raw catalog records as delivered by a catalog provider.
//!
//! Record fields mirror the upstream store: identifiers are opaque strings
//! and numeric fields (weight values, thresholds) arrive as strings. The
//! shape-transform into typed domain objects happens in
//! [`super::CatalogSnapshot::assemble`], not in the storage layer.

use serde::{Deserialize, Serialize};

/// A product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// A criterion record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRecord {
    pub id: String,
    pub name: String,
}

/// A sub-criterion record.
///
/// `preference_type` and `direction` are free-form labels parsed during
/// assembly; `p`, `q`, `s` are optional threshold strings where an empty
/// string or `"-"` means absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCriterionRecord {
    pub id: String,
    pub criterion_id: String,
    pub name: String,
    pub preference_type: String,
    pub direction: String,
    /// Aggregation weight; absent means 1.0 (uniform weighting).
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub p: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub s: Option<String>,
}

/// A weight option record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub id: String,
    pub sub_criterion_id: String,
    pub label: String,
    pub value: String,
}

/// A product weight assignment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub product_id: String,
    pub weight_ids: Vec<String>,
}

/// The five record collections a catalog provider yields for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecords {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub criteria: Vec<CriterionRecord>,
    #[serde(default)]
    pub sub_criteria: Vec<SubCriterionRecord>,
    #[serde(default)]
    pub weights: Vec<WeightRecord>,
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
}
