//! LDM analyzer - runs every quality check over a declarative model
//!
//! Two views are produced:
//!
//! - a workspace-wide description coverage summary, counting datasets,
//!   attributes and facts whose description is missing or meaningful
//! - a per-dataset breakdown of missing descriptions, obfuscated titles and
//!   near-duplicate titles
//!
//! Similarity scans stay inside one dataset and one item kind, which keeps
//! the quadratic pair scan bounded.

use log::debug;
use serde::Serialize;

use crate::core::models::{Dataset, DeclarativeModel, ItemKind, NamedItem, SimilarPair};

use super::description::{has_no_description, lacks_meaningful_description};
use super::obfuscation::ObfuscationRules;
use super::pairs::find_similar_pairs_with;
use super::similarity::DEFAULT_SIMILARITY_THRESHOLD;

/// Number of examples kept per coverage class by default
pub const DEFAULT_EXAMPLE_LIMIT: usize = 5;

/// Knobs for [`analyze_ldm`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerSettings {
    /// Ratio two titles must exceed to be reported as similar
    pub similarity_threshold: f64,
    /// Obfuscated-title thresholds
    pub rules: ObfuscationRules,
    /// Examples kept per coverage class
    pub example_limit: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            rules: ObfuscationRules::default(),
            example_limit: DEFAULT_EXAMPLE_LIMIT,
        }
    }
}

/// Full analysis of one declarative model
#[derive(Debug, Clone, Serialize)]
pub struct LdmReport {
    /// Number of datasets analyzed
    pub datasets_checked: usize,
    /// Workspace-wide description coverage
    pub coverage: DescriptionCoverage,
    /// Findings per dataset, in declaration order
    pub datasets: Vec<DatasetReport>,
}

/// Description coverage summary
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescriptionCoverage {
    /// Items without a meaningful description
    pub missing_count: usize,
    /// Items with a meaningful description
    pub well_defined_count: usize,
    /// First few items without a meaningful description
    pub missing_examples: Vec<DescriptionExample>,
    /// First few items with a meaningful description
    pub well_defined_examples: Vec<DescriptionExample>,
}

/// One item in the coverage summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionExample {
    /// What kind of object this is
    pub kind: ItemKind,
    /// Object identifier
    pub id: String,
    /// Object title
    pub title: Option<String>,
    /// Object description as stored
    pub description: Option<String>,
    /// Owning dataset, for attributes and facts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

/// Findings for a single dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    /// Dataset identifier
    pub id: String,
    /// Dataset title
    pub title: Option<String>,
    /// Attributes and facts with no real description
    pub missing_descriptions: Vec<ItemRef>,
    /// Dataset, attribute and fact titles that look obfuscated
    pub obfuscated_titles: Vec<ObfuscatedFinding>,
    /// Near-duplicate attribute titles
    pub similar_attributes: Vec<SimilarPair>,
    /// Near-duplicate fact titles
    pub similar_facts: Vec<SimilarPair>,
}

/// Reference to an LDM object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRef {
    /// What kind of object this is
    pub kind: ItemKind,
    /// Object identifier
    pub id: String,
    /// Object title
    pub title: Option<String>,
}

/// An obfuscated title and why it was flagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObfuscatedFinding {
    /// What kind of object this is
    pub kind: ItemKind,
    /// Object identifier
    pub id: String,
    /// The flagged title
    pub title: String,
    /// Reason reported by the detector
    pub reason: String,
}

impl DatasetReport {
    /// Number of findings in this dataset
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.missing_descriptions.len()
            + self.obfuscated_titles.len()
            + self.similar_attributes.len()
            + self.similar_facts.len()
    }
}

impl LdmReport {
    /// Number of findings across all datasets
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.datasets.iter().map(DatasetReport::issue_count).sum()
    }

    /// Whether no dataset has any finding
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

impl DescriptionCoverage {
    fn record(&mut self, example: DescriptionExample, missing: bool, limit: usize) {
        let (count, examples) = if missing {
            (&mut self.missing_count, &mut self.missing_examples)
        } else {
            (&mut self.well_defined_count, &mut self.well_defined_examples)
        };
        *count += 1;
        if examples.len() < limit {
            examples.push(example);
        }
    }
}

/// Analyze every dataset of a declarative model
#[must_use]
pub fn analyze_ldm(model: &DeclarativeModel, settings: &AnalyzerSettings) -> LdmReport {
    let mut coverage = DescriptionCoverage::default();
    let mut datasets = Vec::with_capacity(model.ldm.datasets.len());

    for dataset in &model.ldm.datasets {
        record_coverage(&mut coverage, dataset, settings.example_limit);
        let report = analyze_dataset(dataset, settings);
        debug!("Dataset {}: {} finding(s)", dataset.id, report.issue_count());
        datasets.push(report);
    }

    LdmReport {
        datasets_checked: datasets.len(),
        coverage,
        datasets,
    }
}

/// An LDM object seen through the checks' title/description shape
struct Entry<'a> {
    kind: ItemKind,
    id: &'a str,
    item: &'a dyn NamedItem,
    owner: Option<&'a str>,
}

impl<'a> Entry<'a> {
    const fn new(
        kind: ItemKind,
        id: &'a str,
        item: &'a dyn NamedItem,
        owner: Option<&'a str>,
    ) -> Self {
        Self {
            kind,
            id,
            item,
            owner,
        }
    }

    fn title(&self) -> Option<String> {
        self.item.title().map(String::from)
    }
}

/// The dataset followed by its attributes and facts
fn entries(dataset: &Dataset) -> Vec<Entry<'_>> {
    let owner = Some(dataset.id.as_str());
    let mut entries = Vec::with_capacity(1 + dataset.attributes.len() + dataset.facts.len());
    entries.push(Entry::new(ItemKind::Dataset, &dataset.id, dataset, None));
    for attr in &dataset.attributes {
        entries.push(Entry::new(ItemKind::Attribute, &attr.id, attr, owner));
    }
    for fact in &dataset.facts {
        entries.push(Entry::new(ItemKind::Fact, &fact.id, fact, owner));
    }
    entries
}

fn record_coverage(coverage: &mut DescriptionCoverage, dataset: &Dataset, limit: usize) {
    for entry in entries(dataset) {
        let example = DescriptionExample {
            kind: entry.kind,
            id: entry.id.to_string(),
            title: entry.title(),
            description: entry.item.description().map(String::from),
            dataset: entry.owner.map(String::from),
        };
        coverage.record(example, lacks_meaningful_description(entry.item), limit);
    }
}

fn analyze_dataset(dataset: &Dataset, settings: &AnalyzerSettings) -> DatasetReport {
    let mut missing_descriptions = Vec::new();
    let mut obfuscated_titles = Vec::new();

    for entry in entries(dataset) {
        if entry.kind != ItemKind::Dataset && has_no_description(entry.item) {
            missing_descriptions.push(ItemRef {
                kind: entry.kind,
                id: entry.id.to_string(),
                title: entry.title(),
            });
        }

        let verdict = settings.rules.check(entry.item.title());
        if verdict.is_obfuscated {
            obfuscated_titles.push(ObfuscatedFinding {
                kind: entry.kind,
                id: entry.id.to_string(),
                title: entry.title().unwrap_or_default(),
                reason: verdict.reason,
            });
        }
    }

    DatasetReport {
        id: dataset.id.clone(),
        title: dataset.title.clone(),
        missing_descriptions,
        obfuscated_titles,
        similar_attributes: find_similar_pairs_with(&dataset.attributes, settings.similarity_threshold),
        similar_facts: find_similar_pairs_with(&dataset.facts, settings.similarity_threshold),
    }
}
