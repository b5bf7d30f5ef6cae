//! App names and their case variants.
//!
//! # Design
//!
//! [`AppName`] is an opaque token: no character-set validation, empty and
//! whitespace-only names are accepted. [`CaseVariants`] holds the three
//! spellings the templates are filled with, and owns the placeholder
//! substitution itself.

use serde::Serialize;
use std::fmt;

/// Placeholder replaced by the lowercase variant.
pub const PLACEHOLDER_LOWER: &str = "sample";
/// Placeholder replaced by the uppercase variant.
pub const PLACEHOLDER_UPPER: &str = "SAMPLE";
/// Placeholder replaced by the capitalized variant.
pub const PLACEHOLDER_CAPITALIZED: &str = "Sample";

// ── AppName ──────────────────────────────────────────────────────────────────

/// The name of the app to generate, exactly as the caller typed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the three case variants used by the templates.
    pub fn variants(&self) -> CaseVariants {
        CaseVariants::from_name(&self.0)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AppName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── CaseVariants ─────────────────────────────────────────────────────────────

/// Lowercase, uppercase and naive-capitalized spellings of an app name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseVariants {
    pub lower: String,
    pub upper: String,
    pub capitalized: String,
}

impl CaseVariants {
    pub fn from_name(name: &str) -> Self {
        Self {
            lower: name.to_lowercase(),
            upper: name.to_uppercase(),
            capitalized: capitalize_first(name),
        }
    }

    /// Fill every placeholder in `text`.
    ///
    /// Replacement runs over the whole text in a fixed order: `sample`,
    /// then `SAMPLE`, then `Sample`.
    pub fn substitute(&self, text: &str) -> String {
        text.replace(PLACEHOLDER_LOWER, &self.lower)
            .replace(PLACEHOLDER_UPPER, &self.upper)
            .replace(PLACEHOLDER_CAPITALIZED, &self.capitalized)
    }
}

/// Uppercase the first character and leave the rest untouched.
///
/// `"foo"` becomes `"Foo"`, `"FOO"` stays `"FOO"`. Not a title-case transform.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
