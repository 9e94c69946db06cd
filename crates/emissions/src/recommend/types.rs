use serde::Serialize;

use crate::category::Category;

/// One advisory section: a heading for the category plus one line per
/// item the user reported a positive quantity for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSection {
    pub category: Category,
    /// Fixed section heading, e.g. `"Recomendações para Pecuária"`.
    pub heading: String,
    /// One advisory line per qualifying item, in the input's
    /// deterministic item order.
    pub lines: Vec<String>,
}

/// Ordered advisory output of [`recommend`](super::recommend).
///
/// Sections follow the fixed category order (livestock, crops,
/// fertilizer, fuel, electricity); categories without a positive
/// quantity are skipped silently.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationList {
    pub(crate) sections: Vec<RecommendationSection>,
}

impl RecommendationList {
    /// The advisory sections, in fixed category order.
    pub fn sections(&self) -> &[RecommendationSection] {
        &self.sections
    }

    /// True when no category qualified for advice.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Flattened render order: each heading (as a `###` markdown header)
    /// followed by its advisory bullet lines, matching the results page
    /// layout.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for section in &self.sections {
            out.push(format!("### {}", section.heading));
            for line in &section.lines {
                out.push(format!("- {line}"));
            }
        }
        out
    }
}

/// Noun used in a category's section heading. Differs from
/// [`Category::label`] where the heading reads better in the plural
/// ("Fertilizantes", "Combustíveis").
pub(crate) fn heading_noun(category: Category) -> &'static str {
    match category {
        Category::Livestock => "Pecuária",
        Category::Crops => "Culturas",
        Category::Fertilizer => "Fertilizantes",
        Category::Fuel => "Combustíveis",
        Category::Electricity => "Eletricidade",
    }
}
