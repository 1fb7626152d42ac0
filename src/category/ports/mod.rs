//! Port contracts for category persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by category
//! services.

pub mod repository;

pub use repository::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult};
