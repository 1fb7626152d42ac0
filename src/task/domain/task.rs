//! Task aggregate root, status-transition effects, and listing order.

use super::{TaskDescription, TaskId, TaskPriority, TaskStatus, TaskTitle};
use crate::account::domain::UserId;
use crate::category::domain::CategoryId;
use chrono::{DateTime, Days, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of days ahead of today that count as "due soon", inclusive.
const DUE_SOON_WINDOW_DAYS: u64 = 3;

/// Task aggregate root.
///
/// The owner is fixed at creation and never reassigned. `completed_at` is
/// derived state: it is present exactly when the status is
/// [`TaskStatus::Done`], maintained by [`change_status`](Self::change_status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    category: Option<CategoryId>,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner: UserId,
    /// Persisted category reference, if any.
    pub category: Option<CategoryId>,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by `owner` with default status (`Todo`) and
    /// priority (`Medium`).
    #[must_use]
    pub fn new(owner: UserId, title: TaskTitle, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner,
            category: None,
            title,
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            category: data.category,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the category reference, if any.
    #[must_use]
    pub const fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the completion timestamp, if any.
    ///
    /// Present exactly when [`status`](Self::status) is `Done`.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    pub fn retitle(&mut self, title: TaskTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Replaces or clears the description.
    pub fn set_description(&mut self, description: Option<TaskDescription>, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Replaces the priority.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Replaces or clears the due date.
    ///
    /// Past dates are accepted here; the creation path alone rejects them,
    /// and that check belongs to the lifecycle service.
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Assigns or clears the category reference.
    ///
    /// Cross-owner checks belong to the lifecycle service; the aggregate
    /// records the reference as given.
    pub fn assign_category(&mut self, category: Option<CategoryId>, clock: &impl Clock) {
        self.category = category;
        self.touch(clock);
    }

    /// Sets the workflow status, maintaining the derived completion
    /// timestamp.
    ///
    /// Entering `Done` from any other status stamps `completed_at` with the
    /// current clock time; leaving `Done` clears it; re-setting `Done` keeps
    /// the original completion time. Every call bumps `updated_at`.
    pub fn change_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        let previous = self.status;
        self.status = status;

        if status == TaskStatus::Done {
            if previous != TaskStatus::Done {
                self.completed_at = Some(clock.utc());
            }
        } else {
            self.completed_at = None;
        }

        self.touch(clock);
    }

    /// Advances the status along the quick-advance cycle
    /// ([`TaskStatus::cycled`]), with the same completion-timestamp effects
    /// as [`change_status`](Self::change_status).
    pub fn cycle_status(&mut self, clock: &impl Clock) {
        self.change_status(self.status.cycled(), clock);
    }

    /// Returns `true` when the task is past due and still open.
    ///
    /// Closed tasks (`Done`, `Cancelled`) are never overdue, whatever their
    /// due date.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status.is_open() && self.due_date.is_some_and(|due| due < today)
    }

    /// Returns `true` when the task is due on `today`.
    #[must_use]
    pub fn is_due_today(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due == today)
    }

    /// Returns `true` when the task is due within the next three days,
    /// today and the horizon day included.
    #[must_use]
    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        let Some(due) = self.due_date else {
            return false;
        };
        let Some(horizon) = today.checked_add_days(Days::new(DUE_SOON_WINDOW_DAYS)) else {
            return false;
        };
        due >= today && due <= horizon
    }

    /// Returns `true` when the status is `Done`.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Canonical listing order shared by every adapter.
///
/// Priority descending (urgent first), then due date ascending with absent
/// dates last, then creation time descending (newest first), then task
/// identifier ascending as the final tie-break. The result is total and
/// deterministic for any pair of tasks.
#[must_use]
pub fn listing_order(a: &Task, b: &Task) -> Ordering {
    b.priority()
        .sort_order()
        .cmp(&a.priority().sort_order())
        .then_with(|| due_date_order(a, b))
        .then_with(|| b.created_at().cmp(&a.created_at()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Due date ascending with absent dates sorted after present ones.
#[must_use]
pub fn due_date_order(a: &Task, b: &Task) -> Ordering {
    match (a.due_date(), b.due_date()) {
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
