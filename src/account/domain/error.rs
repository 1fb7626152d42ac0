//! Error types for account domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The email address is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email address does not have the shape `local@domain`.
    #[error("email '{0}' is not a valid address")]
    InvalidEmail(String),

    /// The email address exceeds the 180-character storage limit.
    #[error("email exceeds 180 character limit: {0}")]
    EmailTooLong(String),

    /// The name component is empty after trimming.
    #[error("name must not be empty")]
    EmptyPersonName,

    /// The name component exceeds the 100-character storage limit.
    #[error("name exceeds 100 character limit: {0}")]
    PersonNameTooLong(String),
}

/// Error returned while parsing a role from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
