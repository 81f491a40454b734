//! Result values produced by the title checks

use serde::Serialize;

/// Verdict of the obfuscated-title detector
///
/// `reason` is empty exactly when `is_obfuscated` is false. Build values with
/// [`ObfuscatedTitle::clean`] and [`ObfuscatedTitle::obfuscated`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObfuscatedTitle {
    /// Whether the title looks machine-generated or unreadable
    pub is_obfuscated: bool,
    /// Why the title was flagged
    pub reason: String,
}

impl ObfuscatedTitle {
    /// A title that passed every rule
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            is_obfuscated: false,
            reason: String::new(),
        }
    }

    /// A flagged title
    #[must_use]
    pub fn obfuscated(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty());
        Self {
            is_obfuscated: true,
            reason,
        }
    }
}

/// Two titles flagged as near-duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarPair {
    /// Title of the earlier item
    pub first: String,
    /// Title of the later item
    pub second: String,
}

impl SimilarPair {
    /// Create a pair
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl From<(&str, &str)> for SimilarPair {
    fn from((first, second): (&str, &str)) -> Self {
        Self::new(first, second)
    }
}
