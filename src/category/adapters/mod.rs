//! Persistence adapters for the category module.
//!
//! This module provides concrete implementations of the
//! [`CategoryRepository`] port, following hexagonal architecture principles.
//! Adapters handle all infrastructure concerns while the domain remains
//! pure.
//!
//! [`CategoryRepository`]: crate::category::ports::repository::CategoryRepository

pub mod memory;
