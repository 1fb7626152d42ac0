//! Persistence adapters for the account module.
//!
//! This module provides concrete implementations of the
//! [`UserRepository`] port, following hexagonal architecture principles.
//! Adapters handle all infrastructure concerns while the domain remains
//! pure.
//!
//! [`UserRepository`]: crate::account::ports::repository::UserRepository

pub mod memory;
