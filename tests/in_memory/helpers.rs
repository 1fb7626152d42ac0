//! Shared test helpers for in-memory integration tests.

use aalto::access::{AccessEngine, AccessPolicy};
use aalto::account::{
    adapters::memory::InMemoryUserRepository,
    domain::{EmailAddress, PersonName, User},
    ports::repository::UserRepository,
    services::UserDirectoryService,
};
use aalto::category::{
    adapters::memory::InMemoryCategoryRepository,
    domain::Category,
    services::{CategoryLifecycleService, CreateCategoryRequest},
};
use aalto::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CreateTaskRequest, TaskLifecycleService, TaskQueryService},
};
use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Task lifecycle service wired to the in-memory adapters.
pub type TestTaskLifecycle =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryCategoryRepository, FixedClock>;

/// Task query service wired to the in-memory adapters.
pub type TestTaskQueries = TaskQueryService<InMemoryTaskRepository, FixedClock>;

/// Category lifecycle service wired to the in-memory adapters.
pub type TestCategoryLifecycle =
    CategoryLifecycleService<InMemoryCategoryRepository, InMemoryTaskRepository, FixedClock>;

/// User directory service wired to the in-memory adapters.
pub type TestUserDirectory = UserDirectoryService<
    InMemoryUserRepository,
    InMemoryTaskRepository,
    InMemoryCategoryRepository,
    FixedClock,
>;

/// Clock pinned to a fixed instant for deterministic date assertions.
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

    /// Returns the pinned instant.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.0
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

/// Full service stack sharing one set of in-memory adapters.
pub struct TestStack {
    /// User account storage.
    pub users: Arc<InMemoryUserRepository>,
    /// Task storage.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// Category storage.
    pub categories: Arc<InMemoryCategoryRepository>,
    /// Task lifecycle service under test.
    pub task_lifecycle: TestTaskLifecycle,
    /// Task query service under test.
    pub task_queries: TestTaskQueries,
    /// Category lifecycle service under test.
    pub category_lifecycle: TestCategoryLifecycle,
    /// User directory service under test.
    pub directory: TestUserDirectory,
    /// Clock shared by every service.
    pub clock: FixedClock,
}

impl TestStack {
    /// Wires every service to shared adapters under `policy`.
    #[must_use]
    pub fn new(policy: AccessPolicy) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let clock = FixedClock::from_ymd_hms(2025, 3, 10, 9, 0, 0);
        let engine = AccessEngine::new(policy);

        let task_lifecycle = TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&categories),
            engine,
            Arc::new(clock),
        );
        let task_queries = TaskQueryService::new(Arc::clone(&tasks), Arc::new(clock));
        let category_lifecycle = CategoryLifecycleService::new(
            Arc::clone(&categories),
            Arc::clone(&tasks),
            engine,
            Arc::new(clock),
        );
        let directory = UserDirectoryService::new(
            Arc::clone(&users),
            Arc::clone(&tasks),
            Arc::clone(&categories),
            Arc::new(clock),
        );

        Self {
            users,
            tasks,
            categories,
            task_lifecycle,
            task_queries,
            category_lifecycle,
            directory,
            clock,
        }
    }
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a service stack under the default access policy.
#[fixture]
pub fn stack() -> TestStack {
    TestStack::new(AccessPolicy::default())
}

/// Registers an active account and returns it.
///
/// # Errors
///
/// Returns an error if validation or the store operation fails.
pub fn register_user(
    rt: &Runtime,
    stack: &TestStack,
    email: &str,
) -> Result<User, Box<dyn std::error::Error + Send + Sync>> {
    register_user_at(rt, stack, email, &stack.clock)
}

/// Registers an active account using `clock` for its timestamps.
///
/// # Errors
///
/// Returns an error if validation or the store operation fails.
pub fn register_user_at(
    rt: &Runtime,
    stack: &TestStack,
    email: &str,
    clock: &FixedClock,
) -> Result<User, Box<dyn std::error::Error + Send + Sync>> {
    let user = User::new(
        EmailAddress::new(email)?,
        PersonName::new("Avery")?,
        PersonName::new("Sample")?,
        clock,
    );
    rt.block_on(stack.users.store(&user))?;
    Ok(user)
}

/// Registers an account holding the admin role and returns it.
///
/// # Errors
///
/// Returns an error if validation or the store operation fails.
pub fn register_admin(
    rt: &Runtime,
    stack: &TestStack,
    email: &str,
) -> Result<User, Box<dyn std::error::Error + Send + Sync>> {
    let mut user = User::new(
        EmailAddress::new(email)?,
        PersonName::new("Avery")?,
        PersonName::new("Sample")?,
        &stack.clock,
    );
    user.grant_admin(&stack.clock);
    rt.block_on(stack.users.store(&user))?;
    Ok(user)
}

/// Creates a task through the lifecycle service and returns it.
///
/// # Errors
///
/// Returns an error if the create operation fails.
pub fn create_task(
    rt: &Runtime,
    stack: &TestStack,
    actor: &User,
    request: CreateTaskRequest,
) -> Result<Task, Box<dyn std::error::Error + Send + Sync>> {
    Ok(rt.block_on(stack.task_lifecycle.create_task(actor, request))?)
}

/// Creates a category through the lifecycle service and returns it.
///
/// # Errors
///
/// Returns an error if the create operation fails.
pub fn create_category(
    rt: &Runtime,
    stack: &TestStack,
    actor: &User,
    request: CreateCategoryRequest,
) -> Result<Category, Box<dyn std::error::Error + Send + Sync>> {
    Ok(rt.block_on(stack.category_lifecycle.create_category(actor, request))?)
}

/// Returns `date` advanced by `days`, saturating at the calendar limit.
#[must_use]
pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Returns `date` moved back by `days`, saturating at the calendar limit.
#[must_use]
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}
