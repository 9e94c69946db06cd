//! Per-category advice functions. Each one inspects the submitted
//! quantities for its category and, when at least one item is strictly
//! positive, appends a section with the category's fixed advisory
//! template — the template varies by category, never by item.

use crate::category::Category;
use crate::input::QuantityInput;

use super::types::{heading_noun, RecommendationSection};

/// Collects the items with a strictly positive quantity and, when any
/// exist, appends a section built from `template`.
fn advise_category(
    category: Category,
    input: &QuantityInput,
    sections: &mut Vec<RecommendationSection>,
    template: impl Fn(&str) -> String,
) {
    let lines: Vec<String> = input
        .items(category)
        .filter(|&(_, quantity)| quantity > 0.0)
        .map(|(item, _)| template(item))
        .collect();

    if lines.is_empty() {
        return;
    }

    sections.push(RecommendationSection {
        category,
        heading: format!("Recomendações para {}", heading_noun(category)),
        lines,
    });
}

pub(crate) fn livestock_advice(input: &QuantityInput, sections: &mut Vec<RecommendationSection>) {
    advise_category(Category::Livestock, input, sections, |item| {
        format!(
            "Considere melhorar a eficiência alimentar e o manejo de esterco para {item}. \
             Isso pode ajudar a reduzir as emissões de metano."
        )
    });
}

pub(crate) fn crops_advice(input: &QuantityInput, sections: &mut Vec<RecommendationSection>) {
    advise_category(Category::Crops, input, sections, |item| {
        format!(
            "Otimize o uso de fertilizantes e adote técnicas de agricultura de precisão \
             para {item} para minimizar as emissões."
        )
    });
}

pub(crate) fn fertilizer_advice(input: &QuantityInput, sections: &mut Vec<RecommendationSection>) {
    advise_category(Category::Fertilizer, input, sections, |_| {
        "Use fertilizantes como Composto Orgânico ou Bagaço de Filtragem para reduzir \
         as emissões em comparação com opções convencionais."
            .to_string()
    });
}

pub(crate) fn fuel_advice(input: &QuantityInput, sections: &mut Vec<RecommendationSection>) {
    advise_category(Category::Fuel, input, sections, |_| {
        "Troque para combustíveis mais limpos como Biodiesel ou reduza a dependência \
         de Óleo Diesel para diminuir as emissões."
            .to_string()
    });
}

pub(crate) fn electricity_advice(input: &QuantityInput, sections: &mut Vec<RecommendationSection>) {
    advise_category(Category::Electricity, input, sections, |_| {
        "Aumente o uso de fontes de energia renovável, como Solar ou Eólica, para \
         reduzir as emissões da eletricidade consumida."
            .to_string()
    });
}
