//! Obfuscated-title detection
//!
//! Flags titles that look like column names or generated identifiers rather
//! than something a business user would read. Rules run in a fixed order and
//! the first one that matches decides the verdict:
//!
//! 1. empty or absent title - not flagged
//! 2. shorter than `min_length` characters
//! 3. all uppercase
//! 4. no alphabetic character at all
//! 5. longer than `max_unbroken_length` with no whitespace, `_` or `-`
//!
//! A two-digit title such as `"42"` therefore reports the length rule, not
//! the digits rule.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::ObfuscatedTitle;

/// Minimum readable title length, in characters
pub const DEFAULT_MIN_TITLE_LENGTH: usize = 3;

/// Longest title allowed without any word separator, in characters
pub const DEFAULT_MAX_UNBROKEN_LENGTH: usize = 30;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]").expect("separator pattern is valid"));

/// Tunable thresholds for the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObfuscationRules {
    /// Titles with fewer characters are flagged
    pub min_length: usize,
    /// Titles with more characters and no separator are flagged
    pub max_unbroken_length: usize,
}

impl Default for ObfuscationRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_TITLE_LENGTH,
            max_unbroken_length: DEFAULT_MAX_UNBROKEN_LENGTH,
        }
    }
}

impl ObfuscationRules {
    /// Run the ordered rules against a title
    #[must_use]
    pub fn check(&self, title: Option<&str>) -> ObfuscatedTitle {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            return ObfuscatedTitle::clean();
        };

        let len = title.chars().count();

        if len < self.min_length {
            return ObfuscatedTitle::obfuscated(format!("Title is too short ({len} characters)"));
        }

        if is_upper(title) {
            return ObfuscatedTitle::obfuscated("Title is all uppercase");
        }

        if !title.chars().any(char::is_alphabetic) {
            return ObfuscatedTitle::obfuscated(
                "Title contains only numbers and special characters",
            );
        }

        if len > self.max_unbroken_length && !SEPARATOR.is_match(title) {
            return ObfuscatedTitle::obfuscated("Title is too long without spaces");
        }

        ObfuscatedTitle::clean()
    }
}

/// Check a title with the default thresholds
#[must_use]
pub fn check_obfuscated(title: Option<&str>) -> ObfuscatedTitle {
    ObfuscationRules::default().check(title)
}

/// At least one cased character and no lowercase ones
///
/// Digits, spaces and punctuation are ignored, so `"REVENUE 2024"` counts.
fn is_upper(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
