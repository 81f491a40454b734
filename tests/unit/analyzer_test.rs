//! Tests for the LDM analyzer

use ldmlint::core::models::{ItemKind, SimilarPair};
use ldmlint::core::services::{AnalyzerSettings, analyze_ldm};

use crate::common::{DatasetBuilder, model, sample_model};

#[test]
fn sample_model_findings() {
    let report = analyze_ldm(&sample_model(), &AnalyzerSettings::default());
    assert_eq!(report.datasets_checked, 2);

    let customers = &report.datasets[0];
    assert_eq!(customers.id, "customers");
    assert_eq!(customers.missing_descriptions.len(), 1);
    assert_eq!(customers.missing_descriptions[0].id, "customer_name_2");
    assert_eq!(customers.obfuscated_titles.len(), 1);
    assert_eq!(customers.obfuscated_titles[0].reason, "Title is all uppercase");
    assert_eq!(
        customers.similar_attributes,
        vec![SimilarPair::new("Customer Name", "customer name")]
    );

    let orders = &report.datasets[1];
    assert_eq!(orders.missing_descriptions.len(), 1);
    assert_eq!(orders.missing_descriptions[0].kind, ItemKind::Fact);
    assert_eq!(orders.obfuscated_titles[0].title, "CustomerLifetimeValueMetricTotal");
    assert!(orders.similar_facts.is_empty());

    assert_eq!(report.issue_count(), 5);
}

#[test]
fn coverage_totals_match_item_count() {
    let m = sample_model();
    let report = analyze_ldm(&m, &AnalyzerSettings::default());
    assert_eq!(report.coverage.missing_count, 2);
    assert_eq!(report.coverage.well_defined_count, 6);
    assert_eq!(
        report.coverage.missing_count + report.coverage.well_defined_count,
        m.item_count()
    );
}

#[test]
fn similarity_does_not_cross_datasets() {
    let m = model(vec![
        DatasetBuilder::new("a", "Alpha").attribute("x", "Region", Some("Sales region")).build(),
        DatasetBuilder::new("b", "Beta").attribute("y", "Region", Some("Sales region")).build(),
    ]);

    let report = analyze_ldm(&m, &AnalyzerSettings::default());
    assert!(report.datasets.iter().all(|d| d.similar_attributes.is_empty()));
}

#[test]
fn similarity_does_not_cross_kinds() {
    let m = model(vec![
        DatasetBuilder::new("a", "Alpha")
            .attribute("x", "Amount", Some("Order amount"))
            .fact("y", "Amount", Some("Order amount"))
            .build(),
    ]);

    let report = analyze_ldm(&m, &AnalyzerSettings::default());
    assert!(report.is_clean());
}

#[test]
fn dataset_title_is_checked_for_obfuscation() {
    let m = model(vec![DatasetBuilder::new("ds", "DS").description("Dataset").build()]);

    let report = analyze_ldm(&m, &AnalyzerSettings::default());
    let finding = &report.datasets[0].obfuscated_titles[0];
    assert_eq!(finding.kind, ItemKind::Dataset);
    assert_eq!(finding.reason, "Title is too short (2 characters)");
}

#[test]
fn settings_change_thresholds() {
    let settings = AnalyzerSettings {
        similarity_threshold: 0.5,
        ..AnalyzerSettings::default()
    };
    let m = model(vec![
        DatasetBuilder::new("a", "Alpha")
            .fact("x", "Revenue", Some("Gross revenue"))
            .fact("y", "Revenues total", Some("Revenue incl. tax"))
            .build(),
    ]);

    assert!(analyze_ldm(&m, &AnalyzerSettings::default()).is_clean());
    assert_eq!(analyze_ldm(&m, &settings).datasets[0].similar_facts.len(), 1);
}

#[test]
fn report_serializes_kinds_lowercase() {
    let report = analyze_ldm(&sample_model(), &AnalyzerSettings::default());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"kind\":\"attribute\""));
    assert!(json.contains("\"datasets_checked\":2"));
}

#[test]
fn analysis_is_repeatable() {
    let m = sample_model();
    let first = serde_json::to_value(analyze_ldm(&m, &AnalyzerSettings::default())).unwrap();
    let second = serde_json::to_value(analyze_ldm(&m, &AnalyzerSettings::default())).unwrap();
    assert_eq!(first, second);
}
