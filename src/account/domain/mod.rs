//! Domain model for user accounts.
//!
//! The account domain models identity, contact details, role membership, and
//! the active flag for registered users. Authentication (passwords, sessions)
//! lives outside the core; the domain only describes already-authenticated
//! identities. All infrastructure concerns are kept outside the domain
//! boundary.

mod email;
mod error;
mod ids;
mod name;
mod role;
mod user;

pub use email::EmailAddress;
pub use error::{AccountDomainError, ParseRoleError};
pub use ids::UserId;
pub use name::PersonName;
pub use role::Role;
pub use user::{PersistedUserData, User};
