//! CatalogSnapshot - the assembled, validated join of catalog records.

use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{CriterionId, ProductId, SubCriterionId, WeightId};

use super::{
    CatalogError, CatalogRecords, Criterion, Product, ProductWeightAssignment, SubCriterion,
    WeightOption,
};

/// The fully joined catalog for one ranking run.
///
/// Collections keep upstream insertion order; that order is the documented
/// tie-break for the final ranking. Lookup maps (weight by id, assigned
/// weight by product and sub-criterion) are built once during assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    criteria: Vec<Criterion>,
    sub_criteria: Vec<SubCriterion>,
    weights: HashMap<WeightId, WeightOption>,
    assignments: HashMap<ProductId, HashMap<SubCriterionId, WeightId>>,
}

impl CatalogSnapshot {
    /// Assembles a snapshot from raw provider records.
    ///
    /// Performs the shape-transform the upstream store used to express as a
    /// nested aggregation pipeline: parse each record, then join through
    /// explicit lookup maps.
    ///
    /// # Errors
    ///
    /// `CatalogError` for unparseable records, dangling references,
    /// duplicate ids, or more than one weight per (product, sub-criterion).
    pub fn assemble(records: CatalogRecords) -> Result<Self, CatalogError> {
        let mut products = Vec::with_capacity(records.products.len());
        for rec in &records.products {
            let id = parse_id(&rec.id, ProductId::new(rec.id.as_str()))?;
            products.push(Product::new(id, rec.name.as_str(), rec.category.as_str()));
        }

        let mut criteria = Vec::with_capacity(records.criteria.len());
        for rec in &records.criteria {
            let id = parse_id(&rec.id, CriterionId::new(rec.id.as_str()))?;
            criteria.push(Criterion::new(id, rec.name.as_str()));
        }

        let mut sub_criteria = Vec::with_capacity(records.sub_criteria.len());
        for rec in &records.sub_criteria {
            let id = parse_id(&rec.id, SubCriterionId::new(rec.id.as_str()))?;
            let criterion_id = parse_id(&rec.criterion_id, CriterionId::new(rec.criterion_id.as_str()))?;
            let preference_type = rec.preference_type.parse().map_err(|e| {
                CatalogError::InvalidRecord {
                    id: rec.id.clone(),
                    reason: format!("{}", e),
                }
            })?;
            let direction = rec.direction.parse().map_err(|e| CatalogError::InvalidRecord {
                id: rec.id.clone(),
                reason: format!("{}", e),
            })?;

            let mut sub = SubCriterion::new(id, criterion_id, rec.name.as_str(), preference_type, direction);
            if let Some(weight) = rec.weight {
                sub = sub.with_weight(weight);
            }
            if let Some(p) = parse_threshold(&rec.id, "p", rec.p.as_deref())? {
                sub = sub.with_p(p);
            }
            if let Some(q) = parse_threshold(&rec.id, "q", rec.q.as_deref())? {
                sub = sub.with_q(q);
            }
            if let Some(s) = parse_threshold(&rec.id, "s", rec.s.as_deref())? {
                sub = sub.with_s(s);
            }
            sub_criteria.push(sub);
        }

        let mut weights = Vec::with_capacity(records.weights.len());
        for rec in &records.weights {
            let id = parse_id(&rec.id, WeightId::new(rec.id.as_str()))?;
            let sub_id = parse_id(
                &rec.sub_criterion_id,
                SubCriterionId::new(rec.sub_criterion_id.as_str()),
            )?;
            weights.push(WeightOption::new(id, sub_id, rec.label.as_str(), rec.value.as_str()));
        }

        let mut assignments = Vec::with_capacity(records.assignments.len());
        for rec in &records.assignments {
            let product_id = parse_id(&rec.product_id, ProductId::new(rec.product_id.as_str()))?;
            let mut weight_ids = Vec::with_capacity(rec.weight_ids.len());
            for wid in &rec.weight_ids {
                weight_ids.push(parse_id(wid, WeightId::new(wid.as_str()))?);
            }
            assignments.push(ProductWeightAssignment::new(product_id, weight_ids));
        }

        Self::from_parts(products, criteria, sub_criteria, weights, assignments)
    }

    /// Builds a snapshot from already-typed parts, enforcing the catalog's
    /// referential invariants.
    pub fn from_parts(
        products: Vec<Product>,
        criteria: Vec<Criterion>,
        sub_criteria: Vec<SubCriterion>,
        weights: Vec<WeightOption>,
        assignments: Vec<ProductWeightAssignment>,
    ) -> Result<Self, CatalogError> {
        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.to_string(),
                });
            }
        }

        let mut criterion_ids = HashSet::new();
        for criterion in &criteria {
            if !criterion_ids.insert(criterion.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    id: criterion.id.to_string(),
                });
            }
        }

        let mut sub_ids = HashSet::new();
        for sub in &sub_criteria {
            if !sub_ids.insert(sub.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    id: sub.id.to_string(),
                });
            }
            if !criterion_ids.contains(&sub.criterion_id) {
                return Err(CatalogError::UnknownCriterion {
                    sub_criterion: sub.id.clone(),
                    criterion: sub.criterion_id.clone(),
                });
            }
            sub.validate().map_err(|e| CatalogError::InvalidRecord {
                id: sub.id.to_string(),
                reason: e.to_string(),
            })?;
        }

        let mut weight_map = HashMap::with_capacity(weights.len());
        for weight in weights {
            if !sub_ids.contains(&weight.sub_criterion_id) {
                return Err(CatalogError::UnknownSubCriterion {
                    weight: weight.id.clone(),
                    sub_criterion: weight.sub_criterion_id.clone(),
                });
            }
            let weight_id = weight.id.clone();
            if weight_map.insert(weight_id.clone(), weight).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: weight_id.to_string(),
                });
            }
        }

        let mut assignment_map: HashMap<ProductId, HashMap<SubCriterionId, WeightId>> =
            HashMap::new();
        for assignment in &assignments {
            if !product_ids.contains(&assignment.product_id) {
                return Err(CatalogError::UnknownProduct {
                    product: assignment.product_id.clone(),
                });
            }
            let per_product = assignment_map
                .entry(assignment.product_id.clone())
                .or_default();
            for weight_id in &assignment.weight_ids {
                let weight = weight_map.get(weight_id).ok_or_else(|| {
                    CatalogError::UnknownWeight {
                        product: assignment.product_id.clone(),
                        weight: weight_id.clone(),
                    }
                })?;
                let sub_id = weight.sub_criterion_id.clone();
                if per_product.insert(sub_id.clone(), weight_id.clone()).is_some() {
                    return Err(CatalogError::DuplicateAssignment {
                        product: assignment.product_id.clone(),
                        sub_criterion: sub_id,
                    });
                }
            }
        }

        Ok(Self {
            products,
            criteria,
            sub_criteria,
            weights: weight_map,
            assignments: assignment_map,
        })
    }

    /// Creates a builder for constructing snapshots in tests and adapters.
    pub fn builder() -> CatalogSnapshotBuilder {
        CatalogSnapshotBuilder::new()
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Criteria in catalog order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Sub-criteria in catalog order.
    pub fn sub_criteria(&self) -> &[SubCriterion] {
        &self.sub_criteria
    }

    /// Looks up a weight option by id.
    pub fn weight(&self, id: &WeightId) -> Option<&WeightOption> {
        self.weights.get(id)
    }

    /// The weight option a product has assigned for a sub-criterion, if any.
    pub fn assigned_weight(
        &self,
        product: &ProductId,
        sub_criterion: &SubCriterionId,
    ) -> Option<&WeightOption> {
        self.assignments
            .get(product)?
            .get(sub_criterion)
            .and_then(|wid| self.weights.get(wid))
    }

    /// Distinct product categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Number of products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of sub-criteria.
    pub fn sub_criterion_count(&self) -> usize {
        self.sub_criteria.len()
    }
}

fn parse_id<T>(raw: &str, parsed: Result<T, crate::domain::foundation::ValidationError>) -> Result<T, CatalogError> {
    parsed.map_err(|e| CatalogError::InvalidRecord {
        id: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_threshold(
    record_id: &str,
    field: &str,
    raw: Option<&str>,
) -> Result<Option<f64>, CatalogError> {
    let raw = match raw {
        None => return Ok(None),
        Some(r) => r.trim(),
    };
    // The upstream store marks absent thresholds with "" or "-".
    if raw.is_empty() || raw == "-" {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(CatalogError::InvalidRecord {
            id: record_id.to_string(),
            reason: format!("threshold '{}' is not a number: '{}'", field, raw),
        }),
    }
}

/// Builder for constructing snapshots from typed parts.
#[derive(Debug, Default)]
pub struct CatalogSnapshotBuilder {
    products: Vec<Product>,
    criteria: Vec<Criterion>,
    sub_criteria: Vec<SubCriterion>,
    weights: Vec<WeightOption>,
    assignments: Vec<ProductWeightAssignment>,
    invalid: Option<String>,
}

impl CatalogSnapshotBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product.
    pub fn product(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        match ProductId::new(id) {
            Ok(id) => self.products.push(Product::new(id, name, category)),
            Err(e) => self.invalid = Some(e.to_string()),
        }
        self
    }

    /// Adds a criterion.
    pub fn criterion(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        match CriterionId::new(id) {
            Ok(id) => self.criteria.push(Criterion::new(id, name)),
            Err(e) => self.invalid = Some(e.to_string()),
        }
        self
    }

    /// Adds a sub-criterion.
    pub fn sub_criterion(mut self, sub: SubCriterion) -> Self {
        self.sub_criteria.push(sub);
        self
    }

    /// Adds a weight option.
    pub fn weight(
        mut self,
        id: impl Into<String>,
        sub_criterion_id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        match (WeightId::new(id), SubCriterionId::new(sub_criterion_id)) {
            (Ok(id), Ok(sub_id)) => self.weights.push(WeightOption::new(id, sub_id, label, value)),
            (Err(e), _) | (_, Err(e)) => self.invalid = Some(e.to_string()),
        }
        self
    }

    /// Assigns weight options to a product.
    pub fn assign<I, S>(mut self, product_id: impl Into<String>, weight_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let product_id = match ProductId::new(product_id) {
            Ok(id) => id,
            Err(e) => {
                self.invalid = Some(e.to_string());
                return self;
            }
        };
        let mut ids = Vec::new();
        for wid in weight_ids {
            match WeightId::new(wid) {
                Ok(id) => ids.push(id),
                Err(e) => {
                    self.invalid = Some(e.to_string());
                    return self;
                }
            }
        }
        self.assignments
            .push(ProductWeightAssignment::new(product_id, ids));
        self
    }

    /// Builds the snapshot, running full referential validation.
    pub fn build(self) -> Result<CatalogSnapshot, CatalogError> {
        if let Some(reason) = self.invalid {
            return Err(CatalogError::InvalidRecord {
                id: String::new(),
                reason,
            });
        }
        CatalogSnapshot::from_parts(
            self.products,
            self.criteria,
            self.sub_criteria,
            self.weights,
            self.assignments,
        )
    }
}
