//! Task bounded context.
//!
//! Covers the full life of a task: creation with validated fields, partial
//! edits, the status machine with its derived completion timestamp, and the
//! owner-scoped queries behind task listings and dashboards. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
