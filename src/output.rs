//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ObfuscatedTitle, SimilarPair};
use crate::core::services::{DatasetReport, DescriptionExample, LdmReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an analyze operation
#[derive(Debug, Serialize)]
pub struct AnalyzeResult {
    /// Where the model was read from
    pub source: String,
    /// When the analysis ran (RFC3339)
    pub generated_at: String,
    /// Total number of findings
    pub issues: usize,
    /// The analysis itself
    #[serde(flatten)]
    pub report: LdmReport,
}

/// Result of a title check operation
#[derive(Debug, Serialize)]
pub struct TitleCheckResult {
    /// One verdict per title, in input order
    pub titles: Vec<TitleVerdict>,
}

/// Verdict for a single title
#[derive(Debug, Serialize)]
pub struct TitleVerdict {
    /// The checked title
    pub title: String,
    /// Whether the title looks obfuscated
    pub is_obfuscated: bool,
    /// Why it was flagged (empty when clean)
    pub reason: String,
}

/// Result of a similarity comparison
#[derive(Debug, Serialize)]
pub struct SimilarityResult {
    /// First text
    pub first: String,
    /// Second text
    pub second: String,
    /// Case-insensitive similarity ratio
    pub ratio: f64,
    /// Threshold the ratio had to exceed
    pub threshold: f64,
    /// Whether the texts count as similar
    pub similar: bool,
}

impl AnalyzeResult {
    /// Wrap a report with its source and a timestamp
    #[must_use]
    pub fn new(source: impl Into<String>, report: LdmReport) -> Self {
        Self {
            source: source.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            issues: report.issue_count(),
            report,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let report = &self.report;
        println!("Analyzed {} dataset(s) from {}\n", report.datasets_checked, self.source);

        if report.datasets_checked == 0 {
            println!("No datasets found.");
            return;
        }

        let coverage = &report.coverage;
        println!(
            "Description coverage: {} missing, {} well-defined",
            coverage.missing_count, coverage.well_defined_count
        );
        if !coverage.missing_examples.is_empty() {
            println!("  Missing, e.g.:");
            for example in &coverage.missing_examples {
                println!("    - {}", describe_example(example));
            }
        }
        if !coverage.well_defined_examples.is_empty() {
            println!("  Well-defined, e.g.:");
            for example in &coverage.well_defined_examples {
                println!("    - {}", describe_example(example));
            }
        }
        println!();

        for dataset in report.datasets.iter().filter(|d| d.issue_count() > 0) {
            render_dataset(dataset);
        }

        if self.issues == 0 {
            println!("{}", "No issues found.".green());
        } else {
            println!("{}", format!("Found {} issue(s).", self.issues).yellow());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn render_dataset(dataset: &DatasetReport) {
    match &dataset.title {
        Some(title) => println!("Dataset {} ({title})", dataset.id.bold()),
        None => println!("Dataset {}", dataset.id.bold()),
    }

    if !dataset.missing_descriptions.is_empty() {
        println!("  Missing description:");
        for item in &dataset.missing_descriptions {
            println!("    - {} {}{}", item.kind, item.id, quoted(item.title.as_deref()));
        }
    }

    if !dataset.obfuscated_titles.is_empty() {
        println!("  Obfuscated titles:");
        for finding in &dataset.obfuscated_titles {
            println!(
                "    - {} {} \"{}\": {}",
                finding.kind, finding.id, finding.title, finding.reason
            );
        }
    }

    render_pairs("Similar attribute titles", &dataset.similar_attributes);
    render_pairs("Similar fact titles", &dataset.similar_facts);
    println!();
}

fn render_pairs(heading: &str, pairs: &[SimilarPair]) {
    if pairs.is_empty() {
        return;
    }
    println!("  {heading}:");
    for pair in pairs {
        println!("    - \"{}\" ~ \"{}\"", pair.first, pair.second);
    }
}

fn describe_example(example: &DescriptionExample) -> String {
    let owner = example.dataset.as_ref().map(|d| format!("{d}.")).unwrap_or_default();
    format!("{} {owner}{}{}", example.kind, example.id, quoted(example.title.as_deref()))
}

fn quoted(title: Option<&str>) -> String {
    title.map(|t| format!(" \"{t}\"")).unwrap_or_default()
}

impl TitleCheckResult {
    /// Build from titles and their verdicts
    #[must_use]
    pub fn new(checked: impl IntoIterator<Item = (String, ObfuscatedTitle)>) -> Self {
        let titles = checked
            .into_iter()
            .map(|(title, verdict)| TitleVerdict {
                title,
                is_obfuscated: verdict.is_obfuscated,
                reason: verdict.reason,
            })
            .collect();
        Self { titles }
    }

    /// Number of flagged titles
    #[must_use]
    pub fn flagged(&self) -> usize {
        self.titles.iter().filter(|t| t.is_obfuscated).count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for t in &self.titles {
            if t.is_obfuscated {
                println!("{} \"{}\": {}", "OBFUSCATED".red(), t.title, t.reason);
            } else {
                println!("{} \"{}\"", "OK".green(), t.title);
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl SimilarityResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let verdict = if self.similar { "similar" } else { "not similar" };
                println!(
                    "\"{}\" vs \"{}\": ratio {:.3} (threshold {}) - {verdict}",
                    self.first, self.second, self.ratio, self.threshold
                );
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
