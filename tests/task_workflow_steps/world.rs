//! Shared world state for task workflow BDD scenarios.

use std::sync::Arc;

use aalto::access::{AccessEngine, AccessPolicy};
use aalto::account::domain::{AccountDomainError, EmailAddress, PersonName, User};
use aalto::category::{
    adapters::memory::InMemoryCategoryRepository,
    domain::Category,
    services::{CategoryLifecycleService, CategoryServiceError},
};
use aalto::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleService, TaskQueryService, TaskServiceError},
};
use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Task lifecycle service type used by the BDD world.
pub type TestTaskLifecycle =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryCategoryRepository, FixedClock>;

/// Task query service type used by the BDD world.
pub type TestTaskQueries = TaskQueryService<InMemoryTaskRepository, FixedClock>;

/// Category lifecycle service type used by the BDD world.
pub type TestCategoryLifecycle =
    CategoryLifecycleService<InMemoryCategoryRepository, InMemoryTaskRepository, FixedClock>;

/// Clock pinned to a fixed instant so due-date scenarios are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to the given UTC calendar time.
    ///
    /// Invalid component combinations fall back to the Unix epoch.
    #[must_use]
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .unwrap_or_default();
        Self(instant)
    }

    /// Returns the calendar date of the pinned instant.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scenario world for task workflow behaviour tests.
pub struct TaskWorld {
    /// Task lifecycle service under test.
    pub lifecycle: TestTaskLifecycle,
    /// Query service sharing the same repositories.
    pub queries: TestTaskQueries,
    /// Category service used for scenario setup and deletion attempts.
    pub category_lifecycle: TestCategoryLifecycle,
    /// Clock every service reads.
    pub clock: FixedClock,
    /// The account owning the scenario's data.
    pub actor: Option<User>,
    /// Categories created during setup.
    pub created_categories: Vec<Category>,
    /// The task the scenario revolves around.
    pub task: Option<Task>,
    /// Result of the last task lifecycle call.
    pub last_task_result: Option<Result<Task, TaskServiceError>>,
    /// Result of the last category deletion attempt.
    pub last_delete_result: Option<Result<(), CategoryServiceError>>,
}

impl TaskWorld {
    /// Creates a world with empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let clock = FixedClock::from_ymd_hms(2025, 3, 10, 9, 0, 0);
        let engine = AccessEngine::new(AccessPolicy::default());

        let lifecycle = TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&categories),
            engine,
            Arc::new(clock),
        );
        let queries = TaskQueryService::new(Arc::clone(&tasks), Arc::new(clock));
        let category_lifecycle =
            CategoryLifecycleService::new(categories, tasks, engine, Arc::new(clock));

        Self {
            lifecycle,
            queries,
            category_lifecycle,
            clock,
            actor: None,
            created_categories: Vec::new(),
            task: None,
            last_task_result: None,
            last_delete_result: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds an active account for `email` with sample names.
///
/// # Errors
///
/// Returns an error if the email address fails validation.
pub fn new_account(email: &str, clock: &FixedClock) -> Result<User, AccountDomainError> {
    Ok(User::new(
        EmailAddress::new(email)?,
        PersonName::new("Mari")?,
        PersonName::new("Koivu")?,
        clock,
    ))
}

/// Returns the scenario date one day before today.
#[must_use]
pub fn yesterday(clock: &FixedClock) -> NaiveDate {
    let today = clock.today();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}
