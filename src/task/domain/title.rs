//! Validated task title type.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for a task title.
const MIN_TITLE_LENGTH: usize = 3;

/// Maximum length for a task title, matching the `VARCHAR(255)` column.
const MAX_TITLE_LENGTH: usize = 255;

/// Validated task title, trimmed, 3 to 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] when the value is empty
    /// after trimming, [`TaskDomainError::TaskTitleTooShort`] when it is
    /// shorter than 3 characters, or [`TaskDomainError::TaskTitleTooLong`]
    /// when it exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            return Err(TaskDomainError::EmptyTaskTitle);
        }

        if length < MIN_TITLE_LENGTH {
            return Err(TaskDomainError::TaskTitleTooShort(raw));
        }

        if length > MAX_TITLE_LENGTH {
            return Err(TaskDomainError::TaskTitleTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
