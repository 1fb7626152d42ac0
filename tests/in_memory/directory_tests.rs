//! User directory administration tests.
//!
//! Covers the admin-only gate, listing order, uniqueness on email
//! changes, activity and role toggles, self-protection, and the data
//! cleanup that runs when an account is deleted.

use crate::in_memory::helpers::{
    FixedClock, TestStack, create_category, create_task, register_admin, register_user,
    register_user_at, runtime, stack,
};
use aalto::account::domain::PersonName;
use aalto::account::ports::repository::UserRepository;
use aalto::account::services::{UpdateUserRequest, UserDirectoryError};
use aalto::category::ports::repository::CategoryRepository;
use aalto::category::services::CreateCategoryRequest;
use aalto::task::ports::{TaskFilter, TaskRepository};
use aalto::task::services::CreateTaskRequest;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that the directory listing orders accounts newest first.
#[rstest]
fn listing_orders_accounts_newest_first(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    register_user_at(
        &rt,
        &stack,
        "older@example.com",
        &FixedClock::from_ymd_hms(2025, 3, 1, 8, 0, 0),
    )?;
    register_user_at(
        &rt,
        &stack,
        "newer@example.com",
        &FixedClock::from_ymd_hms(2025, 3, 8, 8, 0, 0),
    )?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;

    let listed = rt.block_on(stack.directory.list_users(&admin))?;
    let emails: Vec<&str> = listed.iter().map(|user| user.email().as_str()).collect();
    assert_eq!(
        emails,
        ["admin@example.com", "newer@example.com", "older@example.com"]
    );
    Ok(())
}

/// Tests that directory operations require the admin role.
#[rstest]
fn directory_requires_the_admin_role(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let plain = register_user(&rt, &stack, "mari@example.com")?;
    let other = register_user(&rt, &stack, "pekka@example.com")?;

    let listed = rt.block_on(stack.directory.list_users(&plain));
    assert!(matches!(listed, Err(UserDirectoryError::Forbidden)));

    let found = rt.block_on(stack.directory.find_user(&plain, other.id()));
    assert!(matches!(found, Err(UserDirectoryError::Forbidden)));
    Ok(())
}

/// Tests that changing an email to a taken address fails validation.
#[rstest]
fn email_collisions_surface_as_validation_failures(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;
    register_user(&rt, &stack, "first@example.com")?;
    let second = register_user(&rt, &stack, "second@example.com")?;

    let result = rt.block_on(stack.directory.update_user(
        &admin,
        second.id(),
        UpdateUserRequest::new().with_email("first@example.com"),
    ));

    let Err(UserDirectoryError::Validation(errors)) = result else {
        return Err("expected a validation failure for the taken email".into());
    };
    assert!(errors.message_for("email").is_some());

    let unchanged = rt.block_on(stack.directory.find_user(&admin, second.id()))?;
    assert_eq!(unchanged.email().as_str(), "second@example.com");
    Ok(())
}

/// Tests deactivating and reinstating an account.
#[rstest]
fn deactivation_round_trip(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;
    let target = register_user(&rt, &stack, "mari@example.com")?;

    let suspended = rt.block_on(stack.directory.toggle_active(&admin, target.id()))?;
    assert!(!suspended.is_active());

    let persisted = rt
        .block_on(stack.users.find_by_id(target.id()))?
        .ok_or("account disappeared after the toggle")?;
    assert!(!persisted.is_active());

    let reinstated = rt.block_on(stack.directory.toggle_active(&admin, target.id()))?;
    assert!(reinstated.is_active());
    Ok(())
}

/// Tests that promotion and demotion change directory access.
#[rstest]
fn promotion_round_trip_changes_directory_access(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;
    let target = register_user(&rt, &stack, "mari@example.com")?;

    let promoted = rt.block_on(stack.directory.toggle_admin(&admin, target.id()))?;
    assert!(promoted.is_admin());

    let seen = rt.block_on(stack.directory.list_users(&promoted))?;
    assert_eq!(seen.len(), 2);

    let demoted = rt.block_on(stack.directory.toggle_admin(&admin, target.id()))?;
    assert!(!demoted.is_admin());

    let denied = rt.block_on(stack.directory.list_users(&demoted));
    assert!(matches!(denied, Err(UserDirectoryError::Forbidden)));
    Ok(())
}

/// Tests that destructive self-targeting operations are rejected.
#[rstest]
fn self_protection_blocks_destructive_self_targets(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;

    let deactivated = rt.block_on(stack.directory.toggle_active(&admin, admin.id()));
    assert!(matches!(
        deactivated,
        Err(UserDirectoryError::SelfProtection)
    ));

    let demoted = rt.block_on(stack.directory.toggle_admin(&admin, admin.id()));
    assert!(matches!(demoted, Err(UserDirectoryError::SelfProtection)));

    let deleted = rt.block_on(stack.directory.delete_user(&admin, admin.id()));
    assert!(matches!(deleted, Err(UserDirectoryError::SelfProtection)));

    // Non-destructive self-edits stay allowed.
    let renamed = rt.block_on(stack.directory.update_user(
        &admin,
        admin.id(),
        UpdateUserRequest::new().with_first_name("Maija"),
    ))?;
    assert_eq!(renamed.first_name(), &PersonName::new("Maija")?);
    Ok(())
}

/// Tests that deleting an account removes its tasks and categories.
#[rstest]
fn deleting_an_account_cleans_owned_data(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;
    let target = register_user(&rt, &stack, "mari@example.com")?;

    let chores = create_category(&rt, &stack, &target, CreateCategoryRequest::new("Chores"))?;
    create_task(
        &rt,
        &stack,
        &target,
        CreateTaskRequest::new("Clean the garage").with_category(chores.id()),
    )?;
    create_task(&rt, &stack, &target, CreateTaskRequest::new("Sort the attic"))?;
    create_task(&rt, &stack, &admin, CreateTaskRequest::new("Admin errand"))?;

    rt.block_on(stack.directory.delete_user(&admin, target.id()))?;

    assert!(rt.block_on(stack.users.find_by_id(target.id()))?.is_none());
    let orphan_tasks = rt.block_on(stack.tasks.find_by_owner(target.id(), &TaskFilter::default()))?;
    assert!(orphan_tasks.is_empty());
    let orphan_categories = rt.block_on(stack.categories.find_by_owner(target.id()))?;
    assert!(orphan_categories.is_empty());

    let kept = rt.block_on(stack.tasks.find_by_owner(admin.id(), &TaskFilter::default()))?;
    assert_eq!(kept.len(), 1);
    Ok(())
}
