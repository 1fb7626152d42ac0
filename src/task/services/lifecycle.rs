//! Task lifecycle service.
//!
//! Drives task creation, partial edits, status transitions and deletion.
//! Every mutating operation checks the acting user's capability through
//! the [`AccessEngine`] before any state is touched, and field-level
//! problems are collected into [`ValidationErrors`] so callers can render
//! all of them at once.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::access::AccessEngine;
use crate::account::domain::{User, UserId};
use crate::category::domain::CategoryId;
use crate::category::ports::{CategoryRepository, CategoryRepositoryError};
use crate::task::domain::{Task, TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTitle};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::validation::ValidationErrors;
use chrono::NaiveDate;

/// Request payload for creating a task.
///
/// Only the title is mandatory; everything else falls back to the task
/// defaults (todo status, medium priority, no description, no due date,
/// no category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
    due_date: Option<NaiveDate>,
    category: Option<CategoryId>,
}

impl CreateTaskRequest {
    /// Creates a request with the given title and defaults elsewhere.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            status: None,
            due_date: None,
            category: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets an initial status other than the default.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Assigns the task to a category owned by the task owner.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }
}

/// Request payload for partially updating a task.
///
/// Absent fields keep their current value. Description, due date and
/// category distinguish "leave alone" from "clear": `with_description`
/// replaces the text while `clear_description` removes it, and likewise
/// for the other two. Status is deliberately not part of this request;
/// transitions go through [`TaskLifecycleService::change_status`] so the
/// completion timestamp rules stay in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<Option<String>>,
    priority: Option<TaskPriority>,
    due_date: Option<Option<NaiveDate>>,
    category: Option<Option<CategoryId>>,
}

impl UpdateTaskRequest {
    /// Creates an empty request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Moves the task into a category owned by the task owner.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(Some(category));
        self
    }

    /// Detaches the task from its category.
    #[must_use]
    pub const fn clear_category(mut self) -> Self {
        self.category = Some(None);
        self
    }
}

/// Errors surfaced by the task services.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// One or more request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// No task exists under the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The referenced category does not exist or belongs to another user.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
    /// The acting user lacks the capability for this operation.
    #[error("not allowed to {action} this task")]
    Forbidden {
        /// Capability that was denied.
        action: &'static str,
    },
    /// The task repository failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The category repository failed.
    #[error(transparent)]
    CategoryRepository(#[from] CategoryRepositoryError),
}

/// Convenient result alias for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Coordinates task mutations against the repositories and the access
/// engine.
pub struct TaskLifecycleService<T, G, C>
where
    T: TaskRepository,
    G: CategoryRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    categories: Arc<G>,
    engine: AccessEngine,
    clock: Arc<C>,
}

impl<T, G, C> TaskLifecycleService<T, G, C>
where
    T: TaskRepository,
    G: CategoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service over the given repositories, access engine and
    /// clock.
    pub const fn new(
        tasks: Arc<T>,
        categories: Arc<G>,
        engine: AccessEngine,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            categories,
            engine,
            clock,
        }
    }

    /// Creates a task owned by the acting user.
    ///
    /// Collects every field problem into one [`ValidationErrors`] value:
    /// the title and description limits, and a due date lying in the past
    /// relative to the clock's current day. A category reference is then
    /// resolved against the owner's categories; anything else reports
    /// [`TaskServiceError::CategoryNotFound`].
    ///
    /// # Errors
    /// Returns [`TaskServiceError::Validation`] for field problems,
    /// [`TaskServiceError::CategoryNotFound`] for unusable category
    /// references and repository errors otherwise.
    pub async fn create_task(
        &self,
        actor: &User,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title: raw_title,
            description: raw_description,
            priority,
            status,
            due_date,
            category,
        } = request;

        let mut errors = ValidationErrors::new();
        let checked_title = errors.check("title", TaskTitle::new(raw_title));
        let description =
            raw_description.and_then(|raw| errors.check("description", TaskDescription::new(raw)));
        if let Some(due) = due_date
            && due < self.clock.utc().date_naive()
        {
            errors.push("due_date", "must not be in the past");
        }
        errors.into_result()?;
        let Some(title) = checked_title else {
            return Err(ValidationErrors::single("title", "must not be empty").into());
        };

        if let Some(category_id) = category {
            self.ensure_owned_category(actor.id(), category_id).await?;
        }

        let mut task = Task::new(actor.id(), title, &*self.clock);
        if description.is_some() {
            task.set_description(description, &*self.clock);
        }
        if let Some(level) = priority {
            task.set_priority(level, &*self.clock);
        }
        if let Some(due) = due_date {
            task.set_due_date(Some(due), &*self.clock);
        }
        if let Some(category_id) = category {
            task.assign_category(Some(category_id), &*self.clock);
        }
        if let Some(initial) = status
            && initial != TaskStatus::Todo
        {
            task.change_status(initial, &*self.clock);
        }
        self.tasks.store(&task).await?;
        tracing::info!(task = %task.id(), owner = %actor.id(), "Created task");
        Ok(task)
    }

    /// Applies a partial update to a task.
    ///
    /// Past due dates are accepted here; only creation rejects them, so
    /// an overdue task can still be edited without moving its date.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist, [`TaskServiceError::Forbidden`] when the acting user may
    /// not edit it, [`TaskServiceError::Validation`] for field problems
    /// and [`TaskServiceError::CategoryNotFound`] for unusable category
    /// references.
    pub async fn update_task(
        &self,
        actor: &User,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let mut task = self.find_existing(id).await?;
        if !self.engine.can_edit_task(actor, &task) {
            return Err(TaskServiceError::Forbidden { action: "edit" });
        }

        let UpdateTaskRequest {
            title: raw_title,
            description: raw_description,
            priority,
            due_date,
            category,
        } = request;

        let mut errors = ValidationErrors::new();
        let title = raw_title.and_then(|raw| errors.check("title", TaskTitle::new(raw)));
        let description = match raw_description {
            Some(Some(raw)) => errors.check("description", TaskDescription::new(raw)).map(Some),
            Some(None) => Some(None),
            None => None,
        };
        errors.into_result()?;

        if let Some(new_title) = title {
            task.retitle(new_title, &*self.clock);
        }
        if let Some(new_description) = description {
            task.set_description(new_description, &*self.clock);
        }
        if let Some(new_priority) = priority {
            task.set_priority(new_priority, &*self.clock);
        }
        if let Some(new_due) = due_date {
            task.set_due_date(new_due, &*self.clock);
        }
        if let Some(new_category) = category {
            if let Some(category_id) = new_category {
                self.ensure_owned_category(task.owner(), category_id).await?;
            }
            task.assign_category(new_category, &*self.clock);
        }
        self.tasks.update(&task).await?;
        tracing::info!(task = %task.id(), "Updated task");
        Ok(task)
    }

    /// Moves a task to the given status.
    ///
    /// Entering the done status stamps the completion timestamp and
    /// leaving it clears the timestamp again; see
    /// [`Task::change_status`].
    ///
    /// # Errors
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist and [`TaskServiceError::Forbidden`] when the acting user may
    /// not edit it.
    pub async fn change_status(
        &self,
        actor: &User,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskServiceResult<Task> {
        let mut task = self.find_existing(id).await?;
        if !self.engine.can_edit_task(actor, &task) {
            return Err(TaskServiceError::Forbidden { action: "edit" });
        }
        task.change_status(status, &*self.clock);
        self.tasks.update(&task).await?;
        tracing::info!(task = %task.id(), status = %task.status(), "Changed task status");
        Ok(task)
    }

    /// Advances a task one step along the status cycle.
    ///
    /// The cycle runs todo, in progress, done and back to todo; a
    /// cancelled task restarts at todo as well.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist and [`TaskServiceError::Forbidden`] when the acting user may
    /// not edit it.
    pub async fn cycle_status(&self, actor: &User, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.find_existing(id).await?;
        if !self.engine.can_edit_task(actor, &task) {
            return Err(TaskServiceError::Forbidden { action: "edit" });
        }
        task.cycle_status(&*self.clock);
        self.tasks.update(&task).await?;
        tracing::info!(task = %task.id(), status = %task.status(), "Cycled task status");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist and [`TaskServiceError::Forbidden`] when the acting user may
    /// not delete it.
    pub async fn delete_task(&self, actor: &User, id: TaskId) -> TaskServiceResult<()> {
        let task = self.find_existing(id).await?;
        if !self.engine.can_delete_task(actor, &task) {
            return Err(TaskServiceError::Forbidden { action: "delete" });
        }
        self.tasks.remove(task.id()).await?;
        tracing::info!(task = %id, "Deleted task");
        Ok(())
    }

    /// Looks up a single task on behalf of the acting user.
    ///
    /// # Errors
    /// Returns [`TaskServiceError::TaskNotFound`] when no task exists
    /// under the identifier and [`TaskServiceError::Forbidden`] when one
    /// exists but the acting user may not view it. Adapters decide
    /// whether to surface the latter as a denial or mask it as absence.
    pub async fn find_task(&self, actor: &User, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.find_existing(id).await?;
        if !self.engine.can_view_task(actor, &task) {
            return Err(TaskServiceError::Forbidden { action: "view" });
        }
        Ok(task)
    }

    async fn find_existing(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    /// Resolves a category reference against one owner's categories.
    ///
    /// A missing category and a category owned by someone else are
    /// indistinguishable to the caller.
    async fn ensure_owned_category(
        &self,
        owner: UserId,
        id: CategoryId,
    ) -> TaskServiceResult<()> {
        self.categories
            .find_by_id(id)
            .await?
            .filter(|category| category.owner() == owner)
            .map(|_| ())
            .ok_or(TaskServiceError::CategoryNotFound(id))
    }
}
