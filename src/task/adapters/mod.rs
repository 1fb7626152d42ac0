//! Persistence adapters for the task module.
//!
//! This module provides concrete implementations of the [`TaskRepository`]
//! port, following hexagonal architecture principles. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! [`TaskRepository`]: crate::task::ports::repository::TaskRepository

pub mod memory;
