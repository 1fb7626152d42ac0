//! Administrative user directory service.
//!
//! Every operation requires the admin role, and the destructive ones
//! (deactivation, demotion, deletion) refuse to target the acting admin's
//! own account before any repository call is made. Account deletion
//! cascades over the target's tasks and categories so no owned data
//! outlives its owner.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::account::domain::{EmailAddress, PersonName, User, UserId};
use crate::account::ports::{UserRepository, UserRepositoryError};
use crate::category::ports::{CategoryRepository, CategoryRepositoryError};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::validation::ValidationErrors;

/// Request payload for partially updating a user account.
///
/// Absent fields keep their current value. Role and activity changes go
/// through [`UserDirectoryService::toggle_admin`] and
/// [`UserDirectoryService::toggle_active`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UpdateUserRequest {
    /// Creates an empty request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replaces the first name.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Replaces the last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

/// Errors surfaced by the user directory service.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// One or more request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// No account exists under the given identifier.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// The acting user does not hold the admin role.
    #[error("directory operations require the admin role")]
    Forbidden,
    /// The acting admin targeted their own account with a destructive
    /// operation.
    #[error("admins cannot deactivate, demote or delete their own account")]
    SelfProtection,
    /// The user repository failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// The task repository failed during a cascade.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
    /// The category repository failed during a cascade.
    #[error(transparent)]
    CategoryRepository(#[from] CategoryRepositoryError),
}

/// Convenient result alias for directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Admin-only management of user accounts.
pub struct UserDirectoryService<R, T, G, C>
where
    R: UserRepository,
    T: TaskRepository,
    G: CategoryRepository,
    C: Clock + Send + Sync,
{
    users: Arc<R>,
    tasks: Arc<T>,
    categories: Arc<G>,
    clock: Arc<C>,
}

impl<R, T, G, C> UserDirectoryService<R, T, G, C>
where
    R: UserRepository,
    T: TaskRepository,
    G: CategoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service over the given repositories and clock.
    pub const fn new(users: Arc<R>, tasks: Arc<T>, categories: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            users,
            tasks,
            categories,
            clock,
        }
    }

    /// Lists every account, newest first.
    ///
    /// # Errors
    /// Returns [`UserDirectoryError::Forbidden`] when the acting user is
    /// not an admin.
    pub async fn list_users(&self, actor: &User) -> UserDirectoryResult<Vec<User>> {
        Self::ensure_admin(actor)?;
        Ok(self.users.list_all().await?)
    }

    /// Looks up a single account.
    ///
    /// # Errors
    /// Returns [`UserDirectoryError::Forbidden`] when the acting user is
    /// not an admin and [`UserDirectoryError::UserNotFound`] when no
    /// account exists under the identifier.
    pub async fn find_user(&self, actor: &User, id: UserId) -> UserDirectoryResult<User> {
        Self::ensure_admin(actor)?;
        self.find_existing(id).await
    }

    /// Applies a partial update to an account's email and names.
    ///
    /// Admins may edit their own account here; only the destructive
    /// operations are self-protected. An email already held by another
    /// account comes back as a validation failure on the `email` field.
    ///
    /// # Errors
    /// Returns [`UserDirectoryError::Forbidden`] when the acting user is
    /// not an admin, [`UserDirectoryError::UserNotFound`] when the account
    /// does not exist and [`UserDirectoryError::Validation`] for field
    /// problems.
    pub async fn update_user(
        &self,
        actor: &User,
        id: UserId,
        request: UpdateUserRequest,
    ) -> UserDirectoryResult<User> {
        Self::ensure_admin(actor)?;
        let mut user = self.find_existing(id).await?;

        let UpdateUserRequest {
            email: raw_email,
            first_name: raw_first,
            last_name: raw_last,
        } = request;

        let mut errors = ValidationErrors::new();
        let email = raw_email.and_then(|raw| errors.check("email", EmailAddress::new(raw)));
        let first_name = raw_first.and_then(|raw| errors.check("first_name", PersonName::new(raw)));
        let last_name = raw_last.and_then(|raw| errors.check("last_name", PersonName::new(raw)));
        errors.into_result()?;

        if let Some(new_email) = email {
            user.change_email(new_email, &*self.clock);
        }
        if first_name.is_some() || last_name.is_some() {
            let first = first_name.unwrap_or_else(|| user.first_name().clone());
            let last = last_name.unwrap_or_else(|| user.last_name().clone());
            user.rename(first, last, &*self.clock);
        }

        match self.users.update(&user).await {
            Ok(()) => {}
            Err(UserRepositoryError::DuplicateEmail(taken)) => {
                return Err(ValidationErrors::single(
                    "email",
                    format!("an account with email {taken} already exists"),
                )
                .into());
            }
            Err(err) => return Err(err.into()),
        }
        tracing::info!(user = %user.id(), "Updated user account");
        Ok(user)
    }

    /// Flips an account between active and deactivated.
    ///
    /// # Errors
    /// Returns [`UserDirectoryError::Forbidden`] when the acting user is
    /// not an admin, [`UserDirectoryError::SelfProtection`] when the target
    /// is the acting admin's own account and
    /// [`UserDirectoryError::UserNotFound`] when the account does not
    /// exist.
    pub async fn toggle_active(&self, actor: &User, id: UserId) -> UserDirectoryResult<User> {
        Self::ensure_admin(actor)?;
        Self::ensure_not_self(actor, id)?;
        let mut user = self.find_existing(id).await?;

        if user.is_active() {
            user.deactivate(&*self.clock);
        } else {
            user.activate(&*self.clock);
        }
        self.users.update(&user).await?;
        tracing::info!(user = %user.id(), active = user.is_active(), "Toggled account activity");
        Ok(user)
    }

    /// Flips an account's admin role.
    ///
    /// # Errors
    /// Returns [`UserDirectoryError::Forbidden`] when the acting user is
    /// not an admin, [`UserDirectoryError::SelfProtection`] when the target
    /// is the acting admin's own account and
    /// [`UserDirectoryError::UserNotFound`] when the account does not
    /// exist.
    pub async fn toggle_admin(&self, actor: &User, id: UserId) -> UserDirectoryResult<User> {
        Self::ensure_admin(actor)?;
        Self::ensure_not_self(actor, id)?;
        let mut user = self.find_existing(id).await?;

        if user.is_admin() {
            user.revoke_admin(&*self.clock);
        } else {
            user.grant_admin(&*self.clock);
        }
        self.users.update(&user).await?;
        tracing::info!(user = %user.id(), admin = user.is_admin(), "Toggled admin role");
        Ok(user)
    }

    /// Deletes an account together with everything it owns.
    ///
    /// The cascade removes the target's tasks first, then their
    /// categories, then the account itself.
    ///
    /// # Errors
    /// Returns [`UserDirectoryError::Forbidden`] when the acting user is
    /// not an admin, [`UserDirectoryError::SelfProtection`] when the target
    /// is the acting admin's own account and
    /// [`UserDirectoryError::UserNotFound`] when the account does not
    /// exist.
    pub async fn delete_user(&self, actor: &User, id: UserId) -> UserDirectoryResult<()> {
        Self::ensure_admin(actor)?;
        Self::ensure_not_self(actor, id)?;
        let user = self.find_existing(id).await?;

        let tasks_removed = self.tasks.remove_by_owner(user.id()).await?;
        let categories_removed = self.categories.remove_by_owner(user.id()).await?;
        self.users.remove(user.id()).await?;
        tracing::info!(
            user = %user.id(),
            tasks_removed,
            categories_removed,
            "Deleted user account"
        );
        Ok(())
    }

    fn ensure_admin(actor: &User) -> UserDirectoryResult<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(UserDirectoryError::Forbidden)
        }
    }

    /// Rejects self-targeting before any repository call.
    fn ensure_not_self(actor: &User, target: UserId) -> UserDirectoryResult<()> {
        if actor.id() == target {
            Err(UserDirectoryError::SelfProtection)
        } else {
            Ok(())
        }
    }

    async fn find_existing(&self, id: UserId) -> UserDirectoryResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(UserDirectoryError::UserNotFound(id))
    }
}
