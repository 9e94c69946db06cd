//! Unit tests for the recommendation engine.

use crate::category::Category;
use crate::input::QuantityInput;
use crate::recommend::recommend;

// -------------------------------------------------------------------------
// Qualification rules
// -------------------------------------------------------------------------

#[test]
fn test_empty_input_yields_no_sections() {
    let list = recommend(&QuantityInput::new());
    assert!(list.is_empty());
    assert!(list.lines().is_empty());
}

#[test]
fn test_zero_quantities_are_skipped_silently() {
    let mut input = QuantityInput::new();
    input.set(Category::Livestock, "Frango", 0.0);
    input.set(Category::Fuel, "Gasolina", 0.0);
    assert!(recommend(&input).is_empty());
}

#[test]
fn test_negative_quantities_do_not_qualify() {
    let mut input = QuantityInput::new();
    input.set(Category::Crops, "Trigo", -1.0);
    assert!(recommend(&input).is_empty());
}

#[test]
fn test_electricity_only() {
    let mut input = QuantityInput::new();
    input.set(Category::Electricity, "Solar", 50.0);

    let list = recommend(&input);
    assert_eq!(list.sections().len(), 1);

    let section = &list.sections()[0];
    assert_eq!(section.category, Category::Electricity);
    assert_eq!(section.heading, "Recomendações para Eletricidade");
    assert_eq!(section.lines.len(), 1);
    assert!(section.lines[0].contains("energia renovável"));
}

// -------------------------------------------------------------------------
// Ordering
// -------------------------------------------------------------------------

#[test]
fn test_sections_follow_fixed_category_order() {
    // Insert in reverse of the presentation order.
    let mut input = QuantityInput::new();
    input.set(Category::Electricity, "Eólica", 10.0);
    input.set(Category::Fuel, "Biodiesel", 5.0);
    input.set(Category::Fertilizer, "Cal", 2.0);
    input.set(Category::Crops, "Soja", 4.0);
    input.set(Category::Livestock, "Ovelhas", 3.0);

    let order: Vec<Category> = recommend(&input)
        .sections()
        .iter()
        .map(|section| section.category)
        .collect();
    assert_eq!(
        order,
        vec![
            Category::Livestock,
            Category::Crops,
            Category::Fertilizer,
            Category::Fuel,
            Category::Electricity,
        ]
    );
}

#[test]
fn test_one_line_per_qualifying_item() {
    let mut input = QuantityInput::new();
    input.set(Category::Livestock, "Vaca de Corte", 2.0);
    input.set(Category::Livestock, "Porcos", 5.0);
    input.set(Category::Livestock, "Frango", 0.0);

    let list = recommend(&input);
    assert_eq!(list.sections().len(), 1);
    assert_eq!(list.sections()[0].lines.len(), 2);
}

// -------------------------------------------------------------------------
// Templates
// -------------------------------------------------------------------------

#[test]
fn test_livestock_and_crop_lines_name_the_item() {
    let mut input = QuantityInput::new();
    input.set(Category::Livestock, "Búfalo", 1.0);
    input.set(Category::Crops, "Arroz", 2.0);

    let list = recommend(&input);
    assert!(list.sections()[0].lines[0].contains("Búfalo"));
    assert!(list.sections()[0].lines[0].contains("metano"));
    assert!(list.sections()[1].lines[0].contains("Arroz"));
    assert!(list.sections()[1].lines[0].contains("agricultura de precisão"));
}

#[test]
fn test_category_fixed_templates_ignore_the_item() {
    let mut input = QuantityInput::new();
    input.set(Category::Fertilizer, "Ureia", 10.0);
    input.set(Category::Fertilizer, "Gesso", 20.0);

    let list = recommend(&input);
    let lines = &list.sections()[0].lines;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1], "fertilizer advice is item-independent");
    assert!(lines[0].contains("Composto Orgânico"));
}

#[test]
fn test_fuel_template_text() {
    let mut input = QuantityInput::new();
    input.set(Category::Fuel, "Óleo Diesel", 10.0);

    let list = recommend(&input);
    assert_eq!(list.sections()[0].heading, "Recomendações para Combustíveis");
    assert!(list.sections()[0].lines[0].contains("Biodiesel"));
}

// -------------------------------------------------------------------------
// Flattened render order
// -------------------------------------------------------------------------

#[test]
fn test_lines_render_heading_then_bullets() {
    let mut input = QuantityInput::new();
    input.set(Category::Livestock, "Cavalos", 1.0);
    input.set(Category::Electricity, "Hidrelétrica", 100.0);

    let lines = recommend(&input).lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "### Recomendações para Pecuária");
    assert!(lines[1].starts_with("- "));
    assert_eq!(lines[2], "### Recomendações para Eletricidade");
    assert!(lines[3].starts_with("- "));
}
