//! Configuration management
//!
//! Thresholds for the quality checks, read from TOML:
//!
//! ```toml
//! [similarity]
//! threshold = 0.8
//!
//! [obfuscation]
//! min_length = 3
//! max_unbroken_length = 30
//!
//! [report]
//! example_limit = 5
//! ```
//!
//! Every key is optional. See [`crate::paths`] for the lookup order.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::analyzer::DEFAULT_EXAMPLE_LIMIT;
use crate::core::services::obfuscation::{DEFAULT_MAX_UNBROKEN_LENGTH, DEFAULT_MIN_TITLE_LENGTH};
use crate::core::services::{AnalyzerSettings, DEFAULT_SIMILARITY_THRESHOLD, ObfuscationRules};
use crate::paths;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// The config file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// The config file
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// ldmlint configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Near-duplicate title detection
    #[serde(default)]
    pub similarity: SimilarityConfig,
    /// Obfuscated-title detection
    #[serde(default)]
    pub obfuscation: ObfuscationConfig,
    /// Report rendering
    #[serde(default)]
    pub report: ReportConfig,
}

/// Similarity settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimilarityConfig {
    /// Ratio two titles must exceed, in `[0, 1]`
    pub threshold: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Obfuscation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObfuscationConfig {
    /// Titles shorter than this are flagged
    pub min_length: usize,
    /// Titles longer than this with no separator are flagged
    pub max_unbroken_length: usize,
}

impl Default for ObfuscationConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_TITLE_LENGTH,
            max_unbroken_length: DEFAULT_MAX_UNBROKEN_LENGTH,
        }
    }
}

/// Report settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Examples shown per description coverage class
    pub example_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            example_limit: DEFAULT_EXAMPLE_LIMIT,
        }
    }
}

impl Config {
    /// Parse and validate config from a TOML string
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Resolve the effective config
    ///
    /// Uses `explicit` if given, else the first of the project and global
    /// config files that exists, else the defaults. Returns the config and
    /// the file it came from.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from(path)?, Some(path.to_path_buf())));
        }

        for candidate in [paths::project_config(), paths::global_config()] {
            if candidate.is_file() {
                debug!("Using config {}", candidate.display());
                let config = Self::load_from(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        debug!("No config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Check that every value is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.similarity.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid(format!(
                "similarity.threshold must be between 0 and 1, got {threshold}"
            )));
        }

        let ObfuscationConfig {
            min_length,
            max_unbroken_length,
        } = self.obfuscation;
        if min_length > max_unbroken_length {
            return Err(ConfigError::Invalid(format!(
                "obfuscation.min_length ({min_length}) exceeds obfuscation.max_unbroken_length \
                 ({max_unbroken_length})"
            )));
        }

        Ok(())
    }

    /// Settings for the analyzer
    #[must_use]
    pub const fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            similarity_threshold: self.similarity.threshold,
            rules: self.obfuscation_rules(),
            example_limit: self.report.example_limit,
        }
    }

    /// Thresholds for the obfuscated-title detector
    #[must_use]
    pub const fn obfuscation_rules(&self) -> ObfuscationRules {
        ObfuscationRules {
            min_length: self.obfuscation.min_length,
            max_unbroken_length: self.obfuscation.max_unbroken_length,
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
