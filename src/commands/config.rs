//! Show the effective configuration

use std::path::Path;

use ldmlint::config::Config;
use ldmlint::output::OutputMode;

/// Print the resolved config and where it came from
pub fn config(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, source) = Config::load(config_path)?;
    let source = source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());

    if mode == OutputMode::Json {
        let json = serde_json::json!({
            "source": source,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("# Source: {source}");
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
