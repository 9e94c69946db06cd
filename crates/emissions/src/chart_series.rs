//! Data series assembly for the results charts.
//!
//! The presentation layer renders three charts: a grouped bar chart
//! comparing annual vs. reduced emissions per item, a bar chart of
//! totals per category, and the decade time-series (fed directly by
//! [`ForecastSeries`](crate::forecast::ForecastSeries)). Assembling the
//! label/value series for the first two is pure computation and lives
//! here; drawing them does not.

use serde::Serialize;

use crate::aggregate::EmissionResult;
use crate::category::Category;
use crate::factors;
use crate::forecast::REDUCED_MULTIPLIER;
use crate::input::QuantityInput;

/// Per-item comparison of annual emissions against the reduced scenario,
/// for the grouped bar chart. Parallel vectors, one entry per item
/// present in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSeries {
    pub labels: Vec<String>,
    pub annual: Vec<f64>,
    pub reduced: Vec<f64>,
}

/// Summed emissions per category, for the totals bar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryTotalsSeries {
    pub labels: Vec<&'static str>,
    pub totals: Vec<f64>,
}

/// Builds the per-item comparison series.
///
/// Items appear in fixed category order and deterministic item order
/// within each category. Every item present in the input is listed —
/// zero quantities produce zero-height bars rather than disappearing,
/// and unknown items chart at zero like everywhere else.
pub fn comparison_series(input: &QuantityInput) -> ComparisonSeries {
    let mut series = ComparisonSeries::default();
    for &category in Category::ALL.iter() {
        for (item, quantity) in input.items(category) {
            let annual = quantity * factors::factor_of(category, item);
            series.labels.push(item.to_string());
            series.annual.push(annual);
            series.reduced.push(annual * REDUCED_MULTIPLIER);
        }
    }
    series
}

/// Builds the totals-per-category series, labelled with the fixed
/// category display labels in presentation order.
pub fn category_totals_series(result: &EmissionResult) -> CategoryTotalsSeries {
    let mut series = CategoryTotalsSeries::default();
    for &category in Category::ALL.iter() {
        series.labels.push(category.label());
        series.totals.push(result.get(category));
    }
    series
}
