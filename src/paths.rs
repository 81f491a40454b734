//! Centralized path definitions for ldmlint
//!
//! ## Configuration lookup
//!
//! ```text
//! ./.ldmlint.toml               # Project config (current directory)
//! ~/.ldmlint/config.toml        # User config
//! ```
//!
//! An explicit `--config` path always wins over both.

use std::path::PathBuf;

/// Project configuration filename
pub const LDMLINT_TOML: &str = ".ldmlint.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".ldmlint";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `.ldmlint.toml` in the current directory.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(LDMLINT_TOML)
}

/// Get the global ldmlint directory.
///
/// Returns `~/.ldmlint/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.ldmlint/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
