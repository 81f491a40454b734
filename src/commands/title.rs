//! Check titles for obfuscation

use std::path::Path;

use ldmlint::config::Config;
use ldmlint::output::{OutputMode, TitleCheckResult};

/// Run the obfuscated-title detector on each title
pub fn title(titles: &[String], config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, _) = Config::load(config_path)?;
    let rules = config.obfuscation_rules();

    let result = TitleCheckResult::new(
        titles.iter().map(|t| (t.clone(), rules.check(Some(t.as_str())))),
    );
    result.render(mode);

    Ok(())
}
