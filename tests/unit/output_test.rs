//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use ldmlint::core::models::ObfuscatedTitle;
use ldmlint::core::services::{AnalyzerSettings, analyze_ldm};
use ldmlint::output::{AnalyzeResult, OutputMode, SimilarityResult, TitleCheckResult};

use crate::common::sample_model;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn analyze_result_flattens_report() {
    let report = analyze_ldm(&sample_model(), &AnalyzerSettings::default());
    let result = AnalyzeResult::new("ldm.json", report);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], "ldm.json");
    assert_eq!(json["issues"], 5);
    assert_eq!(json["datasets_checked"], 2);
    assert_eq!(json["coverage"]["missing_count"], 2);
    assert!(json["generated_at"].as_str().is_some_and(|s| s.contains('T')));
}

#[test]
fn title_check_serialization() {
    let result = TitleCheckResult::new([(
        "REVENUE".to_string(),
        ObfuscatedTitle::obfuscated("Title is all uppercase"),
    )]);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"is_obfuscated\":true"));
    assert!(json.contains("Title is all uppercase"));
}

#[test]
fn similarity_result_serialization() {
    let result = SimilarityResult {
        first: "Customer Name".to_string(),
        second: "customer name".to_string(),
        ratio: 1.0,
        threshold: 0.8,
        similar: true,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"similar\":true"));
    assert!(json.contains("\"threshold\":0.8"));
}
