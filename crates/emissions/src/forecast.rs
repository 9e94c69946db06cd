//! Decade emission forecast under two fixed policy scenarios.
//!
//! Scenarios:
//! - baseline: business as usual, compounding at [`ANNUAL_GROWTH`].
//! - reduced: a flat 20% cut applied once to the year-0 aggregate, then
//!   compounding at the same growth rate.
//!
//! The reduction is a single scalar on the grand total — it is never
//! re-derived per category or from updated category mixes. Downstream
//! consumers compare the two curves, so this shape must stay exactly
//! as-is.

use serde::{Deserialize, Serialize};

use crate::aggregate::EmissionResult;

/// Number of forecast years, including year 0.
pub const FORECAST_YEARS: usize = 10;

/// Business-as-usual growth multiplier applied per year (5% growth).
pub const ANNUAL_GROWTH: f64 = 1.05;

/// Flat multiplier for the reduced scenario, applied once at year 0.
pub const REDUCED_MULTIPLIER: f64 = 0.80;

/// Calendar year the forecast starts at (year offset 0).
pub const START_YEAR: i32 = 2024;

/// Projected emissions (kg CO2e) for both scenarios, indexed by year
/// offset from [`START_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub baseline: [f64; FORECAST_YEARS],
    pub reduced: [f64; FORECAST_YEARS],
}

impl ForecastSeries {
    /// Calendar years covered by the forecast, for the time-series chart
    /// axis.
    pub fn years() -> [i32; FORECAST_YEARS] {
        std::array::from_fn(|offset| START_YEAR + offset as i32)
    }
}

/// Projects the aggregate emissions a decade forward under both
/// scenarios.
///
/// Total over any non-negative [`EmissionResult`]; there are no error
/// conditions.
pub fn project(result: &EmissionResult) -> ForecastSeries {
    let mut baseline = [0.0; FORECAST_YEARS];
    let mut reduced = [0.0; FORECAST_YEARS];

    baseline[0] = result.grand_total();
    reduced[0] = baseline[0] * REDUCED_MULTIPLIER;

    for year in 1..FORECAST_YEARS {
        baseline[year] = baseline[year - 1] * ANNUAL_GROWTH;
        reduced[year] = reduced[year - 1] * ANNUAL_GROWTH;
    }

    ForecastSeries { baseline, reduced }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_total(total: f64) -> EmissionResult {
        EmissionResult {
            fuel: total,
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_compounds_from_grand_total() {
        let series = project(&result_with_total(100.0));
        assert!((series.baseline[0] - 100.0).abs() < 1e-9);
        assert!((series.baseline[1] - 105.0).abs() < 1e-9);
        assert!((series.baseline[2] - 110.25).abs() < 1e-9);
        for year in 1..FORECAST_YEARS {
            assert!(
                (series.baseline[year] - series.baseline[year - 1] * ANNUAL_GROWTH).abs() < 1e-9
            );
        }
    }

    #[test]
    fn test_reduced_is_flat_cut_then_same_growth() {
        let series = project(&result_with_total(100.0));
        assert!((series.reduced[0] - 80.0).abs() < 1e-9);
        assert!((series.reduced[1] - 84.0).abs() < 1e-9);
        assert!((series.reduced[2] - 88.2).abs() < 1e-9);
        assert!((series.reduced[0] - series.baseline[0] * REDUCED_MULTIPLIER).abs() < 1e-9);
        for year in 1..FORECAST_YEARS {
            assert!(
                (series.reduced[year] - series.reduced[year - 1] * ANNUAL_GROWTH).abs() < 1e-9
            );
        }
    }

    #[test]
    fn test_reduction_ratio_holds_every_year() {
        // The cut is applied once, so the ratio stays 0.8 all decade.
        let series = project(&result_with_total(250.0));
        for year in 0..FORECAST_YEARS {
            assert!(
                (series.reduced[year] - series.baseline[year] * REDUCED_MULTIPLIER).abs() < 1e-9
            );
        }
    }

    #[test]
    fn test_zero_total_stays_zero() {
        let series = project(&EmissionResult::default());
        assert_eq!(series.baseline, [0.0; FORECAST_YEARS]);
        assert_eq!(series.reduced, [0.0; FORECAST_YEARS]);
    }

    #[test]
    fn test_years_axis() {
        let years = ForecastSeries::years();
        assert_eq!(years[0], 2024);
        assert_eq!(years[FORECAST_YEARS - 1], 2033);
    }
}
