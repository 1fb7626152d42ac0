//! Repository port for task persistence, owner-scoped queries, and counts.

use super::TaskFilter;
use crate::account::domain::UserId;
use crate::category::domain::CategoryId;
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Per-status task counts for one owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Tasks in `Todo`.
    pub todo: u64,
    /// Tasks in `InProgress`.
    pub in_progress: u64,
    /// Tasks in `Done`.
    pub done: u64,
    /// Tasks in `Cancelled`.
    pub cancelled: u64,
}

impl StatusCounts {
    /// Returns the total across all statuses.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.todo + self.in_progress + self.done + self.cancelled
    }
}

/// Task persistence contract.
///
/// Every query is owner-scoped; no operation returns another owner's tasks.
/// Filtered listings apply the canonical order
/// ([`listing_order`](crate::task::domain::listing_order)) so all adapters
/// agree on result sequencing.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (fields, status, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns `owner`'s tasks satisfying `filter`, in canonical listing
    /// order.
    async fn find_by_owner(
        &self,
        owner: UserId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns per-status counts over `owner`'s full task set.
    async fn count_by_status(&self, owner: UserId) -> TaskRepositoryResult<StatusCounts>;

    /// Counts `owner`'s open tasks with a due date before `today`.
    async fn count_overdue(&self, owner: UserId, today: NaiveDate) -> TaskRepositoryResult<u64>;

    /// Returns `owner`'s open tasks due before `today`, due date ascending.
    async fn find_overdue(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns `owner`'s open tasks due on `today`, priority descending.
    async fn find_due_today(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns `owner`'s open `Urgent`-priority tasks, due date ascending
    /// with absent dates last.
    async fn find_urgent(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks referencing `category`, across all fields and statuses.
    ///
    /// Category deletion uses this to enforce the no-tasks-attached rule.
    async fn count_in_category(&self, category: CategoryId) -> TaskRepositoryResult<u64>;

    /// Returns task counts per category over `owner`'s task set.
    ///
    /// Categories without tasks are absent from the map; uncategorized
    /// tasks are not counted.
    async fn count_by_category(
        &self,
        owner: UserId,
    ) -> TaskRepositoryResult<HashMap<CategoryId, u64>>;

    /// Returns counts of `owner`'s `Done` tasks per completion day within
    /// the inclusive `from..=to` date range.
    ///
    /// Days without completions are absent from the map.
    async fn completed_per_day(
        &self,
        owner: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> TaskRepositoryResult<BTreeMap<NaiveDate, u64>>;

    /// Removes every task owned by `owner`, returning the number removed.
    ///
    /// Used by account deletion; removing zero tasks is not an error.
    async fn remove_by_owner(&self, owner: UserId) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
