//! Error types for category domain validation.

use thiserror::Error;

/// Errors returned while constructing category domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryDomainError {
    /// The category name is empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// The category name exceeds the 100-character storage limit.
    #[error("category name exceeds 100 character limit: {0}")]
    CategoryNameTooLong(String),

    /// The color is not a `#rrggbb` hex value.
    #[error("color '{0}' is not a valid hex color (expected #rrggbb)")]
    InvalidColor(String),

    /// The description exceeds the 500-character limit.
    #[error("description exceeds 500 character limit ({0} characters)")]
    DescriptionTooLong(usize),
}
