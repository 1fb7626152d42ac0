//! Composable filter for owner-scoped task listings.

use crate::category::domain::CategoryId;
use crate::task::domain::{Task, TaskStatus};

/// Minimum length for a search string to take effect.
const MIN_SEARCH_LENGTH: usize = 2;

/// Filter options for task listings.
///
/// All constraints are ANDed; an absent constraint matches everything. The
/// filter never widens a listing beyond the owner scope applied by the
/// repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    category: Option<CategoryId>,
    search: Option<String>,
}

impl TaskFilter {
    /// Creates an unconstrained filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains results to an exact status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Constrains results to an exact category.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets a free-text search over title and description.
    ///
    /// Strings shorter than two characters after trimming are kept but have
    /// no effect; see [`effective_search`](Self::effective_search).
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns the status constraint, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the category constraint, if any.
    #[must_use]
    pub const fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Returns the search string when it is long enough to take effect.
    ///
    /// A trimmed search shorter than two characters is a no-op constraint:
    /// it neither errors nor matches everything, the listing simply ignores
    /// it.
    #[must_use]
    pub fn effective_search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|query| query.chars().count() >= MIN_SEARCH_LENGTH)
    }

    /// Returns `true` when `task` satisfies every active constraint.
    ///
    /// Search is a case-insensitive substring match against the title or
    /// the description.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status
            && task.status() != status
        {
            return false;
        }

        if let Some(category) = self.category
            && task.category() != Some(category)
        {
            return false;
        }

        if let Some(query) = self.effective_search() {
            let needle = query.to_lowercase();
            let in_title = task.title().as_str().to_lowercase().contains(&needle);
            let in_description = task
                .description()
                .is_some_and(|description| description.as_str().to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }
}
