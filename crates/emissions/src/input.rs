//! The closed-schema quantity structure submitted by the input form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Quantities entered by the user for one calculation, keyed by category
/// and item name.
///
/// A `QuantityInput` is built once at the UI boundary when the form is
/// submitted and owned by the caller's session; the core never stores
/// one. The serialized shape is
/// `{"livestock": {"Vaca de Corte": 2.0, ...}, ...}` with absent
/// categories treated as empty.
///
/// Quantities are expected to be non-negative (caller contract). Negative
/// values are accepted and flow through the arithmetic unvalidated,
/// producing formally undefined results rather than a runtime fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityInput {
    quantities: BTreeMap<Category, BTreeMap<String, f64>>,
}

impl QuantityInput {
    /// Empty input: every category present-but-empty lookups return 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the quantity for one item.
    pub fn set(&mut self, category: Category, item: impl Into<String>, quantity: f64) {
        self.quantities
            .entry(category)
            .or_default()
            .insert(item.into(), quantity);
    }

    /// Returns the stored quantity, or `0.0` when the category or item is
    /// absent.
    pub fn quantity(&self, category: Category, item: &str) -> f64 {
        self.quantities
            .get(&category)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterates the `(item, quantity)` pairs stored for a category, in
    /// deterministic (sorted) item order. Empty for absent categories.
    pub fn items(&self, category: Category) -> impl Iterator<Item = (&str, f64)> {
        self.quantities
            .get(&category)
            .into_iter()
            .flatten()
            .map(|(item, &quantity)| (item.as_str(), quantity))
    }

    /// True when no category holds any entry.
    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(BTreeMap::is_empty)
    }

    /// True when the category holds at least one strictly positive
    /// quantity.
    pub fn has_nonzero(&self, category: Category) -> bool {
        self.items(category).any(|(_, quantity)| quantity > 0.0)
    }
}
