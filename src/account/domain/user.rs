//! User account aggregate root.

use super::{EmailAddress, PersonName, Role, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User account aggregate root.
///
/// Accounts carry identity and authorization inputs only; credentials stay
/// with the external authentication layer. Role membership always includes
/// [`Role::User`] regardless of how the account was constructed or what was
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    first_name: PersonName,
    last_name: PersonName,
    roles: BTreeSet<Role>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted account identifier.
    pub id: UserId,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted first name.
    pub first_name: PersonName,
    /// Persisted last name.
    pub last_name: PersonName,
    /// Persisted role memberships.
    pub roles: BTreeSet<Role>,
    /// Persisted active flag.
    pub active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active account with the base `User` role.
    #[must_use]
    pub fn new(
        email: EmailAddress,
        first_name: PersonName,
        last_name: PersonName,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            email,
            first_name,
            last_name,
            roles: BTreeSet::from([Role::User]),
            active: true,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an account from persisted storage.
    ///
    /// The base `User` role is restored even when the persisted role set
    /// omits it.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        let mut roles = data.roles;
        roles.insert(Role::User);
        Self {
            id: data.id,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            roles,
            active: data.active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the first name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Returns first and last name joined with a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the role memberships.
    #[must_use]
    pub const fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    /// Returns `true` when the account holds the `Admin` role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Returns `true` when the account is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the email address.
    pub fn change_email(&mut self, email: EmailAddress, clock: &impl Clock) {
        self.email = email;
        self.touch(clock);
    }

    /// Replaces first and last name.
    pub fn rename(&mut self, first_name: PersonName, last_name: PersonName, clock: &impl Clock) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.touch(clock);
    }

    /// Replaces the role set, always retaining the base `User` role.
    pub fn set_roles(&mut self, roles: BTreeSet<Role>, clock: &impl Clock) {
        self.roles = roles;
        self.roles.insert(Role::User);
        self.touch(clock);
    }

    /// Grants the `Admin` role.
    pub fn grant_admin(&mut self, clock: &impl Clock) {
        self.roles.insert(Role::Admin);
        self.touch(clock);
    }

    /// Revokes the `Admin` role, leaving the base `User` role in place.
    pub fn revoke_admin(&mut self, clock: &impl Clock) {
        self.roles.remove(&Role::Admin);
        self.touch(clock);
    }

    /// Marks the account active.
    pub fn activate(&mut self, clock: &impl Clock) {
        self.active = true;
        self.touch(clock);
    }

    /// Marks the account inactive without deleting any data.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.active = false;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
