//! Tests for the static pricing table.

use arcimboldo_models::{CostDirection, ModelRate, PricingTable, StaticPricingTable};

#[test]
fn cost_scales_with_token_count() {
    let mut table = StaticPricingTable::new();
    table.insert("test-model", ModelRate::new(2.0, 8.0));

    let one_million = table
        .cost("test-model", CostDirection::Input, 1_000_000)
        .expect("known model");
    assert!((one_million - 2.0).abs() < 1e-9);

    let half = table
        .cost("test-model", CostDirection::Input, 500_000)
        .expect("known model");
    assert!((half - 1.0).abs() < 1e-9);
}

#[test]
fn direction_selects_the_rate() {
    let mut table = StaticPricingTable::new();
    table.insert("test-model", ModelRate::new(1.0, 10.0));

    let input = table
        .cost("test-model", CostDirection::Input, 1_000_000)
        .expect("known model");
    let output = table
        .cost("test-model", CostDirection::Output, 1_000_000)
        .expect("known model");

    assert!((output / input - 10.0).abs() < 1e-9);
}

#[test]
fn unknown_model_is_an_error() {
    let table = StaticPricingTable::default();
    let err = table
        .cost("gemini-9.9-imaginary", CostDirection::Output, 100)
        .expect_err("model is not in the table");

    assert_eq!(err.model, "gemini-9.9-imaginary");
}

#[test]
fn zero_tokens_cost_nothing() {
    let table = StaticPricingTable::default();
    let cost = table
        .cost("gemini-2.0-flash", CostDirection::Input, 0)
        .expect("known model");
    assert_eq!(cost, 0.0);
}
