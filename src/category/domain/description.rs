//! Validated category description type.

use super::CategoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a category description.
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validated free-text category description.
///
/// Descriptions are optional on the aggregate; the type itself only exists
/// in validated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryDescription(String);

impl CategoryDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::DescriptionTooLong`] when the value
    /// exceeds 500 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryDomainError> {
        let raw = value.into();
        let length = raw.chars().count();

        if length > MAX_DESCRIPTION_LENGTH {
            return Err(CategoryDomainError::DescriptionTooLong(length));
        }

        Ok(Self(raw))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategoryDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
