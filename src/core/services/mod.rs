//! Quality-check services
//!
//! Pure functions over domain models. Nothing here performs I/O or keeps
//! state between calls.
//!
//! - [`similarity`] - Case-insensitive text similarity ratio
//! - [`obfuscation`] - Ordered heuristics for unreadable titles
//! - [`pairs`] - All-pairs near-duplicate title scan
//! - [`description`] - Missing-description predicates
//! - [`analyzer`] - Runs every check over a declarative LDM

pub mod analyzer;
pub mod description;
pub mod obfuscation;
pub mod pairs;
pub mod similarity;

pub use analyzer::{
    AnalyzerSettings, DatasetReport, DescriptionCoverage, DescriptionExample, ItemRef, LdmReport,
    ObfuscatedFinding, analyze_ldm,
};
pub use description::{has_no_description, lacks_meaningful_description};
pub use obfuscation::{ObfuscationRules, check_obfuscated};
pub use pairs::{find_similar_pairs, find_similar_pairs_with};
pub use similarity::{DEFAULT_SIMILARITY_THRESHOLD, similar, similarity_ratio};
