//! Fixed per-unit emission factor catalogue.
//!
//! Each category carries a compiled-in list of `(item, factor)` pairs,
//! where the factor is kg CO2e per unit of the category's quantity:
//!
//! | Category    | Quantity unit | Factor basis          |
//! |-------------|---------------|-----------------------|
//! | Livestock   | head          | kg CO2e per head      |
//! | Crops       | hectare       | kg CO2e per ha        |
//! | Fertilizer  | kg            | kg CO2e per kg        |
//! | Fuel        | liter / m³    | kg CO2e per liter/m³  |
//! | Electricity | kWh           | kg CO2e per kWh       |
//!
//! The catalogue is immutable: it is the single source of truth both for
//! factor lookup and for enumerating the selectable items on the input
//! form. Lookup is total — an item missing from the catalogue contributes
//! a factor of `0.0`, which opts that resource out of emission accounting
//! rather than raising an error.

use crate::category::Category;

/// Livestock emission factors (kg CO2e per head).
pub const LIVESTOCK_FACTORS: &[(&str, f64)] = &[
    ("Vaca de Corte", 99.0),
    ("Vaca de Leite", 102.0),
    ("Búfalo", 107.0),
    ("Frango", 6.0),
    ("Porcos", 21.0),
    ("Ovelhas", 15.0),
    ("Cabras", 15.0),
    ("Camelo", 84.0),
    ("Cavalos", 56.0),
];

/// Crop emission factors (kg CO2e per hectare).
pub const CROP_FACTORS: &[(&str, f64)] = &[
    ("Trigo", 0.69),
    ("Cevada", 0.54),
    ("Milho", 0.77),
    ("Aveia", 0.64),
    ("Centeio", 0.68),
    ("Arroz", 1.50),
    ("Milhete", 0.67),
    ("Sorgo", 0.61),
    ("Pastagem", 0.15),
    ("Ervilhas", 0.45),
    ("Feijões", 0.62),
    ("Soja", 0.62),
    ("Batatas", 0.43),
    ("Beterraba de Forragem", 0.47),
    ("Cana-de-Açúcar", 0.73),
    ("Amendoim", 0.80),
];

/// Fertilizer emission factors (kg CO2e per kg applied).
pub const FERTILIZER_FACTORS: &[(&str, f64)] = &[
    ("Ureia", 1.87),
    ("Cal", 0.61),
    ("Gesso", 0.10),
    ("Estrume Animal", 0.20),
    ("Composto Orgânico", 0.20),
    ("Bagaço de Filtragem", 0.25),
    ("Vinasse", 0.10),
];

/// Fuel emission factors (kg CO2e per liter or m³).
pub const FUEL_FACTORS: &[(&str, f64)] = &[
    ("Óleo Diesel", 2.68),
    ("Gasolina", 2.31),
    ("Biodiesel", 1.83),
    ("Etanol Anidro", 1.50),
    ("Etanol Hidratado", 1.44),
    ("Gás Natural", 2.75),
];

/// Electricity emission factors (kg CO2e per kWh generated).
pub const ELECTRICITY_FACTORS: &[(&str, f64)] = &[
    ("Solar", 0.05),
    ("Eólica", 0.03),
    ("Hidrelétrica", 0.02),
];

/// Returns the full fixed item list for a category, in catalogue order.
/// The input form enumerates its selectable options from this list.
pub fn catalogue(category: Category) -> &'static [(&'static str, f64)] {
    match category {
        Category::Livestock => LIVESTOCK_FACTORS,
        Category::Crops => CROP_FACTORS,
        Category::Fertilizer => FERTILIZER_FACTORS,
        Category::Fuel => FUEL_FACTORS,
        Category::Electricity => ELECTRICITY_FACTORS,
    }
}

/// Returns the stored emission factor for `item`, or `0.0` when the item
/// is not in the category's catalogue.
///
/// Total function: an unknown item is a legitimate opt-out of that
/// resource's emission accounting, not an error.
pub fn factor_of(category: Category, item: &str) -> f64 {
    catalogue(category)
        .iter()
        .find(|(name, _)| *name == item)
        .map(|&(_, factor)| factor)
        .unwrap_or(0.0)
}

/// Total number of catalogued items across all categories.
pub fn item_count() -> usize {
    Category::ALL.iter().map(|&c| catalogue(c).len()).sum()
}
