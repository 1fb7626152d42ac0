//! Category bounded context.
//!
//! Owner-scoped labels used to group tasks, each with a display color and
//! an optional description. Deleting a category that still has tasks is
//! refused; task links to a category are references only, resolved by the
//! task context. The module follows hexagonal architecture:
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
