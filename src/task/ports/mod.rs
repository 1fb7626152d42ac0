//! Port contracts for task persistence and querying.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.
//! The [`TaskFilter`] travels through the repository port so adapters can
//! push filtering to storage instead of loading the full table.

pub mod filter;
pub mod repository;

pub use filter::TaskFilter;
pub use repository::{StatusCounts, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
