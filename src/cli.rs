//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use ldmlint::output::OutputMode;

/// ldmlint - Quality checks for declarative logical data models
#[derive(Parser, Debug)]
#[command(
    name = "ldmlint",
    version,
    about = "Quality checks for declarative logical data models",
    long_about = "Inspect the logical data model of an analytics workspace.\n\n\
                  Finds missing descriptions, obfuscated titles and near-duplicate\n\
                  attribute and fact titles in an exported declarative LDM document."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to .ldmlint.toml, then ~/.ldmlint/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a declarative LDM document
    Analyze {
        /// LDM JSON file, directory of JSON files, or `-` for stdin
        path: String,

        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Check titles for signs of obfuscation
    Title {
        /// Titles to check
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Compare two texts for near-duplicate similarity
    Similar {
        /// First text
        first: String,

        /// Second text
        second: String,

        /// Ratio the texts must exceed (defaults to the configured threshold)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Analyze { path, strict }) => {
            commands::analyze(&path, strict, config_path, output_mode)
        },
        Some(Command::Title { titles }) => commands::title(&titles, config_path, output_mode),
        Some(Command::Similar {
            first,
            second,
            threshold,
        }) => commands::similar(&first, &second, threshold, config_path, output_mode),
        Some(Command::Config) => commands::config(config_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("ldmlint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ldmlint v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'ldmlint --help' for usage");
                println!("Run 'ldmlint analyze <ldm.json>' to check a model");
            }
            Ok(())
        },
    }
}
