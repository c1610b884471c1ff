//! ProductWeightAssignment - binds weight choices to a product.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, WeightId};

/// Weight choices assigned to one product.
///
/// Invariant (enforced during snapshot assembly): at most one weight per
/// (product, sub-criterion) pair. A product missing a weight for a catalog
/// sub-criterion aborts the run; it is never treated as an implicit zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWeightAssignment {
    pub product_id: ProductId,
    pub weight_ids: Vec<WeightId>,
}

impl ProductWeightAssignment {
    /// Creates a new assignment.
    pub fn new(product_id: ProductId, weight_ids: Vec<WeightId>) -> Self {
        Self {
            product_id,
            weight_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_holds_weight_ids_in_order() {
        let a = ProductWeightAssignment::new(
            ProductId::new("prod-1").unwrap(),
            vec![WeightId::new("w-1").unwrap(), WeightId::new("w-2").unwrap()],
        );
        assert_eq!(a.weight_ids.len(), 2);
        assert_eq!(a.weight_ids[0].as_str(), "w-1");
    }
}
