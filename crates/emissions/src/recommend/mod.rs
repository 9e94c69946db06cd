//! Rule-based recommendation engine for the results page.
//!
//! Split into sub-modules:
//! - `types`: section/list types and heading nouns
//! - `advice`: per-category advice functions
//!
//! There is no ranking or severity weighting: a category either
//! qualifies (some item strictly above zero) and gets its fixed advisory
//! text, or it is skipped silently.

mod advice;
mod types;

#[cfg(test)]
mod tests;

pub use types::{RecommendationList, RecommendationSection};

use crate::input::QuantityInput;

use advice::{
    crops_advice, electricity_advice, fertilizer_advice, fuel_advice, livestock_advice,
};

/// Generates advisory sections for every category with at least one
/// strictly positive quantity.
///
/// Sections always follow the fixed category order — livestock, crops,
/// fertilizer, fuel, electricity — regardless of input insertion order.
/// Pure function of the input; the caller owns the result.
pub fn recommend(input: &QuantityInput) -> RecommendationList {
    let mut sections = Vec::new();

    livestock_advice(input, &mut sections);
    crops_advice(input, &mut sections);
    fertilizer_advice(input, &mut sections);
    fuel_advice(input, &mut sections);
    electricity_advice(input, &mut sections);

    RecommendationList { sections }
}
