//! Aalto: task management service core.
//!
//! This crate provides the core functionality for a personal task manager:
//! owner-scoped tasks and categories, a status machine with derived
//! completion state, and an admin directory for user accounts. Everything
//! here is adapter-agnostic; HTTP routing, rendering and authentication
//! live outside and talk to the core through its services and ports.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`access`]: Capability checks over a configurable ownership policy
//! - [`account`]: User accounts and the admin directory service
//! - [`category`]: Owner-scoped task categories
//! - [`task`]: Task lifecycle, status machine and owner-scoped queries
//! - [`validation`]: Field-keyed validation error aggregation

pub mod access;
pub mod account;
pub mod category;
pub mod task;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
