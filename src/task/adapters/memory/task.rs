//! In-memory repository for task tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::category::domain::CategoryId;
use crate::task::{
    domain::{Task, TaskId, TaskPriority, TaskStatus, due_date_order, listing_order},
    ports::{StatusCounts, TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory task repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.owner() == owner && filter.matches(task))
            .cloned()
            .collect();
        tasks.sort_by(listing_order);
        Ok(tasks)
    }

    async fn count_by_status(&self, owner: UserId) -> TaskRepositoryResult<StatusCounts> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut counts = StatusCounts::default();
        for task in state.tasks.values().filter(|task| task.owner() == owner) {
            match task.status() {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Done => counts.done += 1,
                TaskStatus::Cancelled => counts.cancelled += 1,
            }
        }
        Ok(counts)
    }

    async fn count_overdue(&self, owner: UserId, today: NaiveDate) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let count = state
            .tasks
            .values()
            .filter(|task| task.owner() == owner && task.is_overdue(today))
            .fold(0_u64, |count, _| count + 1);
        Ok(count)
    }

    async fn find_overdue(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.owner() == owner && task.is_overdue(today))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| due_date_order(a, b).then_with(|| listing_order(a, b)));
        Ok(tasks)
    }

    async fn find_due_today(
        &self,
        owner: UserId,
        today: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| {
                task.owner() == owner && task.status().is_open() && task.is_due_today(today)
            })
            .cloned()
            .collect();
        tasks.sort_by(listing_order);
        Ok(tasks)
    }

    async fn find_urgent(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| {
                task.owner() == owner
                    && task.status().is_open()
                    && task.priority() == TaskPriority::Urgent
            })
            .cloned()
            .collect();
        tasks.sort_by(|a, b| due_date_order(a, b).then_with(|| listing_order(a, b)));
        Ok(tasks)
    }

    async fn count_in_category(&self, category: CategoryId) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let count = state
            .tasks
            .values()
            .filter(|task| task.category() == Some(category))
            .fold(0_u64, |count, _| count + 1);
        Ok(count)
    }

    async fn count_by_category(
        &self,
        owner: UserId,
    ) -> TaskRepositoryResult<HashMap<CategoryId, u64>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut counts: HashMap<CategoryId, u64> = HashMap::new();
        for task in state.tasks.values().filter(|task| task.owner() == owner) {
            if let Some(category) = task.category() {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn completed_per_day(
        &self,
        owner: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> TaskRepositoryResult<BTreeMap<NaiveDate, u64>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for task in state.tasks.values().filter(|task| task.owner() == owner) {
            if let Some(completed_at) = task.completed_at() {
                let day = completed_at.date_naive();
                if day >= from && day <= to {
                    *counts.entry(day).or_insert(0) += 1;
                }
            }
        }
        Ok(counts)
    }

    async fn remove_by_owner(&self, owner: UserId) -> TaskRepositoryResult<u64> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut removed = 0_u64;
        state.tasks.retain(|_, task| {
            if task.owner() == owner {
                removed += 1;
                false
            } else {
                true
            }
        });
        Ok(removed)
    }
}
