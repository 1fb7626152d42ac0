//! Owner-scoped task queries.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;

use crate::account::domain::User;
use crate::task::domain::Task;
use crate::task::ports::{TaskFilter, TaskRepository, TaskRepositoryError};

/// Aggregated counters over one user's tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Number of tasks regardless of status.
    pub total: u64,
    /// Tasks still to do.
    pub todo: u64,
    /// Tasks in progress.
    pub in_progress: u64,
    /// Completed tasks.
    pub done: u64,
    /// Cancelled tasks.
    pub cancelled: u64,
    /// Open tasks whose due date lies strictly before today.
    pub overdue: u64,
}

/// Errors surfaced by the task query service.
#[derive(Debug, Error)]
pub enum TaskQueryError {
    /// The task repository failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Convenient result alias for task query operations.
pub type TaskQueryResult<T> = Result<T, TaskQueryError>;

/// Read-side companion to the lifecycle service.
///
/// Every operation is scoped to the acting user's own tasks, so no
/// capability checks are involved; the owner column is the boundary.
pub struct TaskQueryService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<T, C> TaskQueryService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a query service over the given repository and clock.
    pub const fn new(tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Lists the acting user's tasks, narrowed by the filter.
    ///
    /// Results follow the canonical listing order: priority descending,
    /// then due date ascending with undated tasks last, then newest
    /// first.
    ///
    /// # Errors
    /// Returns a repository error when the lookup fails.
    pub async fn list_tasks(
        &self,
        actor: &User,
        filter: &TaskFilter,
    ) -> TaskQueryResult<Vec<Task>> {
        Ok(self.tasks.find_by_owner(actor.id(), filter).await?)
    }

    /// Searches the acting user's tasks by title and description.
    ///
    /// Terms shorter than the minimum search length degrade to an
    /// unfiltered listing.
    ///
    /// # Errors
    /// Returns a repository error when the lookup fails.
    pub async fn search(
        &self,
        actor: &User,
        query: impl Into<String>,
    ) -> TaskQueryResult<Vec<Task>> {
        let filter = TaskFilter::default().with_search(query);
        Ok(self.tasks.find_by_owner(actor.id(), &filter).await?)
    }

    /// Computes the dashboard counters for the acting user.
    ///
    /// # Errors
    /// Returns a repository error when counting fails.
    pub async fn get_stats(&self, actor: &User) -> TaskQueryResult<TaskStats> {
        let counts = self.tasks.count_by_status(actor.id()).await?;
        let overdue = self.tasks.count_overdue(actor.id(), self.today()).await?;
        Ok(TaskStats {
            total: counts.total(),
            todo: counts.todo,
            in_progress: counts.in_progress,
            done: counts.done,
            cancelled: counts.cancelled,
            overdue,
        })
    }

    /// Lists the acting user's open tasks that are past their due date.
    ///
    /// # Errors
    /// Returns a repository error when the lookup fails.
    pub async fn find_overdue(&self, actor: &User) -> TaskQueryResult<Vec<Task>> {
        Ok(self.tasks.find_overdue(actor.id(), self.today()).await?)
    }

    /// Lists the acting user's open tasks due today.
    ///
    /// # Errors
    /// Returns a repository error when the lookup fails.
    pub async fn find_due_today(&self, actor: &User) -> TaskQueryResult<Vec<Task>> {
        Ok(self.tasks.find_due_today(actor.id(), self.today()).await?)
    }

    /// Lists the acting user's open urgent-priority tasks.
    ///
    /// # Errors
    /// Returns a repository error when the lookup fails.
    pub async fn find_urgent(&self, actor: &User) -> TaskQueryResult<Vec<Task>> {
        Ok(self.tasks.find_urgent(actor.id()).await?)
    }

    /// Counts the acting user's completed tasks per day over a date
    /// range, both bounds inclusive.
    ///
    /// Days without completions are absent from the map.
    ///
    /// # Errors
    /// Returns a repository error when the lookup fails.
    pub async fn completion_stats(
        &self,
        actor: &User,
        from: NaiveDate,
        to: NaiveDate,
    ) -> TaskQueryResult<BTreeMap<NaiveDate, u64>> {
        Ok(self.tasks.completed_per_day(actor.id(), from, to).await?)
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
