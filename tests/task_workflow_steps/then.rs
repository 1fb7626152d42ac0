//! Then steps for task workflow BDD scenarios.

use super::world::{TaskWorld, run_async};
use aalto::category::services::CategoryServiceError;
use aalto::task::domain::Task;
use aalto::task::ports::TaskFilter;
use aalto::task::services::{TaskServiceError, TaskStats};
use rstest_bdd_macros::then;

/// Reads the acting user's dashboard counters.
fn current_stats(world: &TaskWorld) -> Result<TaskStats, eyre::Report> {
    let actor = world
        .actor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no account in scenario world"))?;
    run_async(world.queries.get_stats(actor))
        .map_err(|err| eyre::eyre!("stats query failed: {err}"))
}

/// Reloads the scenario task through the lifecycle service.
fn current_task(world: &TaskWorld) -> Result<Task, eyre::Report> {
    let actor = world
        .actor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no account in scenario world"))?;
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task in scenario world"))?;
    run_async(world.lifecycle.find_task(actor, task.id()))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))
}

#[then(r#"the task listing contains "{title}""#)]
fn listing_contains(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let actor = world
        .actor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no account in scenario world"))?;
    let listed = run_async(world.queries.list_tasks(actor, &TaskFilter::default()))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if !listed.iter().any(|task| task.title().as_str() == title) {
        return Err(eyre::eyre!("expected listing to contain '{title}'"));
    }
    Ok(())
}

#[then("the dashboard reports a total of {count:u64}")]
fn dashboard_total(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let stats = current_stats(world)?;
    if stats.total != count {
        return Err(eyre::eyre!(
            "expected a total of {count}, got {}",
            stats.total
        ));
    }
    Ok(())
}

#[then("the dashboard reports {count:u64} completed")]
fn dashboard_completed(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let stats = current_stats(world)?;
    if stats.done != count {
        return Err(eyre::eyre!(
            "expected {count} completed tasks, got {}",
            stats.done
        ));
    }
    Ok(())
}

#[then("the dashboard reports {count:u64} overdue")]
fn dashboard_overdue(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let stats = current_stats(world)?;
    if stats.overdue != count {
        return Err(eyre::eyre!(
            "expected {count} overdue tasks, got {}",
            stats.overdue
        ));
    }
    Ok(())
}

#[then("the task records a completion timestamp")]
fn completion_recorded(world: &TaskWorld) -> Result<(), eyre::Report> {
    let refreshed = current_task(world)?;
    if refreshed.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion timestamp"));
    }
    Ok(())
}

#[then("the task records no completion timestamp")]
fn completion_absent(world: &TaskWorld) -> Result<(), eyre::Report> {
    let refreshed = current_task(world)?;
    if let Some(stamp) = refreshed.completed_at() {
        return Err(eyre::eyre!("expected no completion timestamp, got {stamp}"));
    }
    Ok(())
}

#[then(r#"the overdue queue contains "{title}""#)]
fn overdue_queue_contains(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let actor = world
        .actor
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no account in scenario world"))?;
    let overdue = run_async(world.queries.find_overdue(actor))
        .map_err(|err| eyre::eyre!("overdue query failed: {err}"))?;
    if !overdue.iter().any(|task| task.title().as_str() == title) {
        return Err(eyre::eyre!("expected overdue queue to contain '{title}'"));
    }
    Ok(())
}

#[then("the attempt is rejected as forbidden")]
fn attempt_forbidden(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_task_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task result in scenario world"))?;
    if !matches!(result, Err(TaskServiceError::Forbidden { .. })) {
        return Err(eyre::eyre!("expected a forbidden error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task is still titled "{title}""#)]
fn task_still_titled(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let refreshed = current_task(world)?;
    if refreshed.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title '{title}', got '{}'",
            refreshed.title()
        ));
    }
    Ok(())
}

#[then("the deletion is rejected because tasks remain")]
fn deletion_rejected(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_delete_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing deletion result in scenario world"))?;
    if !matches!(result, Err(CategoryServiceError::CategoryNotEmpty { .. })) {
        return Err(eyre::eyre!(
            "expected a category-not-empty error, got {result:?}"
        ));
    }
    Ok(())
}
