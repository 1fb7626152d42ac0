//! Admin override policy tests across the task and category services.
//!
//! The same scenarios run under the default, strict, and permissive
//! policies to pin down which ownership checks the admin role bypasses.

use crate::in_memory::helpers::{
    TestStack, create_category, create_task, register_admin, register_user, runtime, stack,
};
use aalto::access::AccessPolicy;
use aalto::category::services::{CategoryServiceError, CreateCategoryRequest, UpdateCategoryRequest};
use aalto::task::services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that the default policy lets admins manage foreign tasks.
#[rstest]
fn default_policy_lets_admins_manage_foreign_tasks(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let owner = register_user(&rt, &stack, "mari@example.com")?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;
    let task = create_task(&rt, &stack, &owner, CreateTaskRequest::new("Water the plants"))?;

    let renamed = rt.block_on(stack.task_lifecycle.update_task(
        &admin,
        task.id(),
        UpdateTaskRequest::new().with_title("Water the office plants"),
    ))?;
    assert_eq!(renamed.title().as_str(), "Water the office plants");
    assert_eq!(renamed.owner(), owner.id());

    rt.block_on(stack.task_lifecycle.delete_task(&admin, task.id()))?;
    let remaining = rt.block_on(stack.task_queries.get_stats(&owner))?;
    assert_eq!(remaining.total, 0);
    Ok(())
}

/// Tests that the default policy keeps admins out of foreign categories.
#[rstest]
fn default_policy_keeps_admins_out_of_foreign_categories(
    runtime: io::Result<Runtime>,
    stack: TestStack,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let owner = register_user(&rt, &stack, "mari@example.com")?;
    let admin = register_admin(&rt, &stack, "admin@example.com")?;
    let personal = create_category(&rt, &stack, &owner, CreateCategoryRequest::new("Personal"))?;

    let viewed = rt.block_on(stack.category_lifecycle.find_category(&admin, personal.id()));
    assert!(matches!(
        viewed,
        Err(CategoryServiceError::Forbidden { action: "view" })
    ));

    let edited = rt.block_on(stack.category_lifecycle.update_category(
        &admin,
        personal.id(),
        UpdateCategoryRequest::new().with_name("Renamed"),
    ));
    assert!(matches!(
        edited,
        Err(CategoryServiceError::Forbidden { action: "edit" })
    ));
    Ok(())
}

/// Tests that the strict policy blocks admin access to foreign tasks.
#[rstest]
fn strict_policy_blocks_admin_task_access(
    runtime: io::Result<Runtime>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let strict = TestStack::new(AccessPolicy::strict());
    let owner = register_user(&rt, &strict, "mari@example.com")?;
    let admin = register_admin(&rt, &strict, "admin@example.com")?;
    let task = create_task(&rt, &strict, &owner, CreateTaskRequest::new("Private errand"))?;

    let viewed = rt.block_on(strict.task_lifecycle.find_task(&admin, task.id()));
    assert!(matches!(
        viewed,
        Err(TaskServiceError::Forbidden { action: "view" })
    ));

    let deleted = rt.block_on(strict.task_lifecycle.delete_task(&admin, task.id()));
    assert!(matches!(
        deleted,
        Err(TaskServiceError::Forbidden { action: "delete" })
    ));
    Ok(())
}

/// Tests that the permissive policy opens foreign categories to admins.
#[rstest]
fn permissive_policy_opens_categories_to_admins(
    runtime: io::Result<Runtime>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let permissive = TestStack::new(AccessPolicy::permissive());
    let owner = register_user(&rt, &permissive, "mari@example.com")?;
    let admin = register_admin(&rt, &permissive, "admin@example.com")?;
    let personal =
        create_category(&rt, &permissive, &owner, CreateCategoryRequest::new("Personal"))?;

    let recolored = rt.block_on(permissive.category_lifecycle.update_category(
        &admin,
        personal.id(),
        UpdateCategoryRequest::new().with_color("#AA0044"),
    ))?;
    assert_eq!(recolored.color().as_str(), "#aa0044");
    assert_eq!(recolored.owner(), owner.id());
    Ok(())
}

/// Tests that plain users never cross ownership, whatever the policy.
#[rstest]
fn ownership_never_crosses_between_plain_users(
    runtime: io::Result<Runtime>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let permissive = TestStack::new(AccessPolicy::permissive());
    let owner = register_user(&rt, &permissive, "mari@example.com")?;
    let neighbor = register_user(&rt, &permissive, "pekka@example.com")?;
    let task = create_task(&rt, &permissive, &owner, CreateTaskRequest::new("Private errand"))?;

    let viewed = rt.block_on(permissive.task_lifecycle.find_task(&neighbor, task.id()));
    assert!(matches!(
        viewed,
        Err(TaskServiceError::Forbidden { action: "view" })
    ));

    let edited = rt.block_on(permissive.task_lifecycle.update_task(
        &neighbor,
        task.id(),
        UpdateTaskRequest::new().with_title("Hijacked"),
    ));
    assert!(matches!(
        edited,
        Err(TaskServiceError::Forbidden { action: "edit" })
    ));

    let untouched = rt.block_on(permissive.task_lifecycle.find_task(&owner, task.id()))?;
    assert_eq!(untouched.title().as_str(), "Private errand");
    Ok(())
}
