//! Tests for the description-presence checks

use ldmlint::core::models::{Fact, Item};
use ldmlint::core::services::{has_no_description, lacks_meaningful_description};

#[test]
fn description_duplicating_title() {
    let item = Item::titled("Revenue").with_description("Revenue");
    assert!(has_no_description(&item));
}

#[test]
fn real_description() {
    let item = Item::titled("Revenue").with_description("Total sales revenue in USD");
    assert!(!has_no_description(&item));
    assert!(!lacks_meaningful_description(&item));
}

#[test]
fn absent_description() {
    assert!(has_no_description(&Item::titled("Revenue")));
    assert!(lacks_meaningful_description(&Item::titled("Revenue")));
}

#[test]
fn comparison_is_case_sensitive() {
    let item = Item::titled("Revenue").with_description("revenue");
    assert!(!has_no_description(&item));
}

#[test]
fn applies_to_facts() {
    let fact = Fact {
        id: "amount".to_string(),
        title: Some("Amount".to_string()),
        description: Some("Amount".to_string()),
    };
    assert!(has_no_description(&fact));
}

#[test]
fn coverage_variant_trims() {
    assert!(lacks_meaningful_description(&Item::titled("Revenue").with_description("")));
    assert!(lacks_meaningful_description(&Item::titled(" Revenue").with_description("Revenue ")));
}
