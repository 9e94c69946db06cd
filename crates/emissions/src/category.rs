//! The closed set of emission accounting categories.

use serde::{Deserialize, Serialize};

/// One of the five farm activity categories tracked by the calculator.
///
/// The declaration order is the fixed presentation order. Every ordered
/// iteration over categories in this crate walks [`Category::ALL`], never
/// the insertion order of some input map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Livestock,
    Crops,
    Fertilizer,
    Fuel,
    Electricity,
}

impl Category {
    /// All categories in the fixed presentation order:
    /// livestock, crops, fertilizer, fuel, electricity.
    pub const ALL: [Category; 5] = [
        Category::Livestock,
        Category::Crops,
        Category::Fertilizer,
        Category::Fuel,
        Category::Electricity,
    ];

    /// Stable schema key used by the serialized input shape.
    pub fn key(self) -> &'static str {
        match self {
            Category::Livestock => "livestock",
            Category::Crops => "crops",
            Category::Fertilizer => "fertilizer",
            Category::Fuel => "fuel",
            Category::Electricity => "electricity",
        }
    }

    /// Fixed display label, as shown on the input form and the totals chart.
    pub fn label(self) -> &'static str {
        match self {
            Category::Livestock => "Pecuária",
            Category::Crops => "Culturas",
            Category::Fertilizer => "Fertilizante",
            Category::Fuel => "Combustível",
            Category::Electricity => "Eletricidade",
        }
    }

    /// Unit label for quantities in this category.
    pub fn unit(self) -> &'static str {
        match self {
            Category::Livestock => "cabeças",
            Category::Crops => "ha",
            Category::Fertilizer => "kg",
            Category::Fuel => "litros/m³",
            Category::Electricity => "kWh",
        }
    }
}
