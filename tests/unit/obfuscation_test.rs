//! Tests for the obfuscated-title detector

use ldmlint::core::models::ObfuscatedTitle;
use ldmlint::core::services::{ObfuscationRules, check_obfuscated};

#[test]
fn short_title_mentions_length() {
    let verdict = check_obfuscated(Some("AB"));
    assert!(verdict.is_obfuscated);
    assert!(verdict.reason.contains('2'));
}

#[test]
fn uppercase_title() {
    let verdict = check_obfuscated(Some("REVENUE"));
    assert!(verdict.is_obfuscated);
    assert_eq!(verdict.reason, "Title is all uppercase");
}

#[test]
fn digits_and_symbols_only() {
    let verdict = check_obfuscated(Some("12345-67"));
    assert!(verdict.is_obfuscated);
    assert_eq!(verdict.reason, "Title contains only numbers and special characters");
}

#[test]
fn long_identifier_threshold() {
    assert_eq!(check_obfuscated(Some("CustomerLifetimeValueMetric")), ObfuscatedTitle::clean());

    let verdict = check_obfuscated(Some("CustomerLifetimeValueMetricTotal"));
    assert!(verdict.is_obfuscated);
    assert_eq!(verdict.reason, "Title is too long without spaces");
}

#[test]
fn long_title_with_separator_is_clean() {
    assert!(!check_obfuscated(Some("customer_lifetime_value_metric_total")).is_obfuscated);
    assert!(!check_obfuscated(Some("customer-lifetime-value-metric-total")).is_obfuscated);
    assert!(!check_obfuscated(Some("Customer Lifetime Value Metric Total")).is_obfuscated);
}

#[test]
fn exactly_thirty_characters_is_clean() {
    let title = "Abcdefghij".repeat(3);
    assert_eq!(title.len(), 30);
    assert!(!check_obfuscated(Some(&title)).is_obfuscated);
}

#[test]
fn readable_title_is_clean() {
    let verdict = check_obfuscated(Some("Customer Lifetime Value"));
    assert!(!verdict.is_obfuscated);
    assert!(verdict.reason.is_empty());
}

#[test]
fn absent_title_is_clean() {
    assert_eq!(check_obfuscated(None), ObfuscatedTitle::clean());
    assert_eq!(check_obfuscated(Some("")), ObfuscatedTitle::clean());
}

#[test]
fn uppercase_rule_wins_over_long_rule() {
    let verdict = check_obfuscated(Some("CUSTOMERLIFETIMEVALUEMETRICTOTAL"));
    assert_eq!(verdict.reason, "Title is all uppercase");
}

#[test]
fn reason_is_empty_iff_clean() {
    for title in ["AB", "REVENUE", "12345-67", "Revenue", "Order Date", "x", "%%%"] {
        let verdict = check_obfuscated(Some(title));
        assert_eq!(verdict.is_obfuscated, !verdict.reason.is_empty(), "title {title:?}");
    }
}

#[test]
fn default_rules_match_free_function() {
    let rules = ObfuscationRules::default();
    for title in ["AB", "REVENUE", "CustomerLifetimeValueMetricTotal", "Revenue"] {
        assert_eq!(rules.check(Some(title)), check_obfuscated(Some(title)));
    }
}
