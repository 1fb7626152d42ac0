//! Task status and its presentation mappings.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// No transition table restricts movement between statuses; any status may
/// be assigned from any other. The [`Task`](super::Task) aggregate derives
/// the completion timestamp from transitions into and out of [`Done`].
///
/// [`Done`]: TaskStatus::Done
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
    /// Work was abandoned without completion.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To do",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns the display color keyword.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Todo => "gray",
            Self::InProgress => "blue",
            Self::Done => "green",
            Self::Cancelled => "red",
        }
    }

    /// Returns the display icon name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Todo => "circle",
            Self::InProgress => "clock",
            Self::Done => "check-circle",
            Self::Cancelled => "x-circle",
        }
    }

    /// Returns `true` for statuses that still count as outstanding work.
    ///
    /// Overdue and due-today views exclude closed statuses through this
    /// predicate.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Todo | Self::InProgress)
    }

    /// Returns the next status in the quick-advance cycle.
    ///
    /// `Todo` advances to `InProgress`, `InProgress` to `Done`, and both
    /// `Done` and `Cancelled` restart at `Todo`.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done | Self::Cancelled => Self::Todo,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
