//! Validated email address type.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address, matching the `VARCHAR(180)` column.
const MAX_EMAIL_LENGTH: usize = 180;

/// Validated, lowercase-normalized email address.
///
/// Addresses are unique across accounts; uniqueness is enforced by the
/// repository, normalization here guarantees that `Alice@Example.COM` and
/// `alice@example.com` collide rather than coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed and lowercased. The shape check is deliberately
    /// permissive: exactly one `@` with non-empty local and domain parts and
    /// no interior whitespace. Deliverability is not the domain's concern.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyEmail`] when the value is empty
    /// after trimming, [`AccountDomainError::InvalidEmail`] when it does not
    /// look like an address, or [`AccountDomainError::EmailTooLong`] when it
    /// exceeds 180 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AccountDomainError::EmptyEmail);
        }

        if normalized.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AccountDomainError::EmailTooLong(raw));
        }

        let mut parts = normalized.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next();

        let is_valid = match domain {
            Some(host) => {
                !local.is_empty()
                    && !host.is_empty()
                    && !host.contains('@')
                    && !normalized.chars().any(char::is_whitespace)
            }
            None => false,
        };

        if !is_valid {
            return Err(AccountDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
