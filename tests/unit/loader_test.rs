//! Tests for the JSON LDM loader

use std::fs;

use ldmlint::adapters::json::{LoadError, find_ldm_files, load_path, load_reader};
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "ldm": {
    "datasets": [
      {
        "id": "campaigns",
        "title": "Campaigns",
        "description": "Marketing campaigns",
        "grain": [{"id": "campaign_id", "type": "attribute"}],
        "attributes": [
          {"id": "campaign_name", "title": "Campaign Name", "labels": [], "sourceColumn": "NAME"}
        ],
        "facts": [
          {"id": "budget", "title": "Budget", "description": "Planned spend", "sourceColumn": "BUDGET"}
        ],
        "references": []
      }
    ],
    "dateInstances": [{"id": "date", "title": "Date", "granularities": ["DAY"]}]
  }
}"#;

#[test]
fn loads_exported_document() {
    let model = load_reader(DOCUMENT.as_bytes(), "<test>").unwrap();
    let ds = &model.ldm.datasets[0];
    assert_eq!(ds.id, "campaigns");
    assert_eq!(ds.attributes[0].id, "campaign_name");
    assert_eq!(ds.facts[0].description.as_deref(), Some("Planned spend"));
}

#[test]
fn directory_only_collects_json() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ldm.json"), DOCUMENT).unwrap();
    fs::write(temp.path().join("README.md"), "# export").unwrap();

    let files = find_ldm_files(temp.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(load_path(temp.path()).unwrap().ldm.datasets.len(), 1);
}

#[test]
fn parse_error_names_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{\"ldm\": [").unwrap();

    let err = load_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}
