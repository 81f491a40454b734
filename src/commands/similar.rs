//! Compare two texts

use std::path::Path;

use ldmlint::config::Config;
use ldmlint::core::services::{similar as is_similar, similarity_ratio};
use ldmlint::output::{OutputMode, SimilarityResult};

/// Print the similarity ratio of two texts and whether it passes the threshold
pub fn similar(
    first: &str,
    second: &str,
    threshold: Option<f64>,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let threshold = match threshold {
        Some(t) if (0.0..=1.0).contains(&t) => t,
        Some(t) => anyhow::bail!("Threshold must be between 0 and 1, got {t}"),
        None => Config::load(config_path)?.0.similarity.threshold,
    };

    let ratio = if first.is_empty() || second.is_empty() {
        0.0
    } else {
        similarity_ratio(&first.to_lowercase(), &second.to_lowercase())
    };

    let result = SimilarityResult {
        first: first.to_string(),
        second: second.to_string(),
        ratio,
        threshold,
        similar: is_similar(first, second, threshold),
    };
    result.render(mode);

    Ok(())
}
