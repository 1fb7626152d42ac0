//! Validated person name type.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a name component, matching the `VARCHAR(100)` column.
const MAX_NAME_LENGTH: usize = 100;

/// Validated first or last name component.
///
/// Names are trimmed but otherwise kept as entered; casing is presentation,
/// not identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Creates a validated name component.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyPersonName`] when the value is
    /// empty after trimming or [`AccountDomainError::PersonNameTooLong`] when
    /// it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AccountDomainError::EmptyPersonName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(AccountDomainError::PersonNameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
