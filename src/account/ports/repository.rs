//! Repository port for user account persistence.

use crate::account::domain::{EmailAddress, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User account persistence contract.
///
/// Email uniqueness is a storage invariant: both [`store`](Self::store) and
/// [`update`](Self::update) reject an address already held by another
/// account.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the account ID
    /// already exists or [`UserRepositoryError::DuplicateEmail`] when the
    /// email address is already registered.
    async fn store(&self, user: &User) -> UserRepositoryResult<()>;

    /// Persists changes to an existing account (email, names, roles, active
    /// flag, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the account does not
    /// exist or [`UserRepositoryError::DuplicateEmail`] when the new email
    /// address belongs to another account.
    async fn update(&self, user: &User) -> UserRepositoryResult<()>;

    /// Removes an account.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the account does not
    /// exist.
    async fn remove(&self, id: UserId) -> UserRepositoryResult<()>;

    /// Finds an account by identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds an account by normalized email address.
    ///
    /// Returns `None` when no account has the given address.
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>>;

    /// Returns all accounts, newest first (creation timestamp descending,
    /// email ascending for equal timestamps).
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// An account with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// An account with the same email address already exists.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// The account was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
