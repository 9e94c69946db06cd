//! Weighted-sum aggregation of quantities into per-category emissions.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::factors;
use crate::input::QuantityInput;

/// Summed emissions per category (kg CO2e), produced by
/// [`total_emissions`].
///
/// The grand total is derived on demand rather than stored: it is a sum
/// of five numbers, and recomputing keeps the struct free of fields that
/// could drift out of sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub livestock: f64,
    pub crops: f64,
    pub fertilizer: f64,
    pub fuel: f64,
    pub electricity: f64,
}

impl EmissionResult {
    /// Summed emissions for one category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Livestock => self.livestock,
            Category::Crops => self.crops,
            Category::Fertilizer => self.fertilizer,
            Category::Fuel => self.fuel,
            Category::Electricity => self.electricity,
        }
    }

    fn set(&mut self, category: Category, value: f64) {
        match category {
            Category::Livestock => self.livestock = value,
            Category::Crops => self.crops = value,
            Category::Fertilizer => self.fertilizer = value,
            Category::Fuel => self.fuel = value,
            Category::Electricity => self.electricity = value,
        }
    }

    /// Grand total across all five categories.
    pub fn grand_total(&self) -> f64 {
        Category::ALL.iter().map(|&category| self.get(category)).sum()
    }
}

/// Sums `quantity × factor` over the given `(item, quantity)` pairs.
///
/// Items missing from the catalogue contribute zero. Quantities are
/// expected to be non-negative (caller contract); negative quantities
/// pass through and simply produce negative emissions.
pub fn emissions_for<'a, I>(category: Category, items: I) -> f64
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    items
        .into_iter()
        .map(|(item, quantity)| quantity * factors::factor_of(category, item))
        .sum()
}

/// Computes per-category emission totals for one submitted input.
///
/// Pure and deterministic: the same input always produces the same
/// result, and nothing is cached or mutated.
pub fn total_emissions(input: &QuantityInput) -> EmissionResult {
    let mut result = EmissionResult::default();
    for &category in Category::ALL.iter() {
        result.set(category, emissions_for(category, input.items(category)));
    }
    result
}
