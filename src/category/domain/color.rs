//! Validated hex color type.

use super::CategoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color assigned to newly created categories: the indigo `#6366f1`.
const DEFAULT_COLOR: &str = "#6366f1";

/// Validated `#rrggbb` display color, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Creates a validated hex color.
    ///
    /// Accepts `#` followed by exactly six hex digits; the value is trimmed
    /// and lowercased. Shorthand (`#abc`) and alpha channels are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::InvalidColor`] when the value does not
    /// match `#rrggbb`.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        let Some(digits) = normalized.strip_prefix('#') else {
            return Err(CategoryDomainError::InvalidColor(raw));
        };

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CategoryDomainError::InvalidColor(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the color as a string slice, including the leading `#`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    /// Returns the default category color `#6366f1`.
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_owned())
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
