//! Product - an alternative to be ranked.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProductId;

/// A product (alternative) in the catalog.
///
/// Scores per sub-criterion are not stored here; they are resolved from the
/// product's weight assignments at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(id: ProductId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
        }
    }
}
