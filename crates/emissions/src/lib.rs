//! Computational core of the farm GEE (greenhouse gas) emissions
//! calculator.
//!
//! Estimates emissions for a small farm operation from user-entered
//! quantities — livestock head counts, crop hectares, fertilizer
//! kilograms, fuel volumes, electricity kWh — by multiplying them
//! against a fixed per-unit factor catalogue, then derives a decade
//! forecast under two policy scenarios, chart-ready data series, and
//! rule-based textual recommendations.
//!
//! Everything here is a pure, stateless function over plain data. The
//! presentation layer (page navigation, form widgets, chart rendering)
//! owns all session state — including the last-submitted
//! [`QuantityInput`] — and passes it in per call; nothing is cached or
//! persisted on this side of the boundary.
//!
//! All operations are total over their documented domain: unknown
//! category/item names degrade to a zero contribution instead of
//! failing, and negative quantities are a documented caller contract
//! violation that flows through the arithmetic unvalidated.

pub mod aggregate;
pub mod category;
pub mod chart_series;
pub mod factors;
pub mod forecast;
pub mod input;
pub mod recommend;

pub use aggregate::{emissions_for, total_emissions, EmissionResult};
pub use category::Category;
pub use chart_series::{
    category_totals_series, comparison_series, CategoryTotalsSeries, ComparisonSeries,
};
pub use factors::{catalogue, factor_of};
pub use forecast::{project, ForecastSeries};
pub use input::QuantityInput;
pub use recommend::{recommend, RecommendationList, RecommendationSection};
