//! Analyze a declarative LDM document

use std::io;
use std::path::Path;

use anyhow::Context;
use log::info;

use ldmlint::adapters::json;
use ldmlint::config::Config;
use ldmlint::core::services::analyze_ldm;
use ldmlint::output::{AnalyzeResult, OutputMode};

/// Load the model at `path` (or stdin for `-`) and report its quality findings
pub fn analyze(
    path: &str,
    strict: bool,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (config, _) = Config::load(config_path)?;

    let (model, source) = if path == "-" {
        let model = json::load_reader(io::stdin().lock(), "<stdin>")?;
        (model, "<stdin>".to_string())
    } else {
        let model = json::load_path(Path::new(path))
            .with_context(|| format!("Failed to load LDM from {path}"))?;
        (model, path.to_string())
    };

    info!("Analyzing {} LDM object(s) from {source}", model.item_count());
    let report = analyze_ldm(&model, &config.analyzer_settings());
    let result = AnalyzeResult::new(source, report);
    result.render(mode);

    if strict && result.issues > 0 {
        anyhow::bail!("{} quality issue(s) found", result.issues);
    }

    Ok(())
}
