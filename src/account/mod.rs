//! Account bounded context.
//!
//! User identities with normalized email addresses, a role set and an
//! active flag, plus the admin-only directory service that manages them.
//! Authentication lives outside the core; operations receive an already
//! resolved acting [`User`](domain::User). The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
