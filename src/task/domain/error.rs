//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTaskTitle,

    /// The task title is shorter than the 3-character minimum.
    #[error("title must be at least 3 characters: {0}")]
    TaskTitleTooShort(String),

    /// The task title exceeds the 255-character storage limit.
    #[error("title exceeds 255 character limit: {0}")]
    TaskTitleTooLong(String),

    /// The description exceeds the 5000-character limit.
    #[error("description exceeds 5000 character limit ({0} characters)")]
    DescriptionTooLong(usize),
}

/// Error returned while parsing a task status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
