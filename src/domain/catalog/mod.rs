//! Catalog module - Reference data fed into the ranking engine.
//!
//! Products, criteria, sub-criteria, weight options, and per-product weight
//! assignments are administered upstream and arrive as flat record
//! collections. `CatalogSnapshot` performs the strongly-typed join in
//! application code: lookup maps are built once per run, never inside the
//! storage layer's query language.

mod assignment;
mod criterion;
mod errors;
mod product;
mod records;
mod snapshot;
mod sub_criterion;
mod weight;

pub use assignment::ProductWeightAssignment;
pub use criterion::Criterion;
pub use errors::CatalogError;
pub use product::Product;
pub use records::{
    AssignmentRecord, CatalogRecords, CriterionRecord, ProductRecord, SubCriterionRecord,
    WeightRecord,
};
pub use snapshot::{CatalogSnapshot, CatalogSnapshotBuilder};
pub use sub_criterion::SubCriterion;
pub use weight::WeightOption;
