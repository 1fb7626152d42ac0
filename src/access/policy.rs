//! Configurable admin-override policy.

use serde::{Deserialize, Serialize};

/// Controls whether the admin role overrides ownership checks.
///
/// Task and category overrides are configured independently; the two rules
/// evolved separately and both variants stay supported rather than being
/// merged into one behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    admin_overrides_tasks: bool,
    admin_overrides_categories: bool,
}

impl AccessPolicy {
    /// Creates a policy with explicit override flags.
    #[must_use]
    pub const fn new(admin_overrides_tasks: bool, admin_overrides_categories: bool) -> Self {
        Self {
            admin_overrides_tasks,
            admin_overrides_categories,
        }
    }

    /// Strict ownership: the admin role overrides nothing.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(false, false)
    }

    /// Full override: admins pass every ownership check.
    #[must_use]
    pub const fn permissive() -> Self {
        Self::new(true, true)
    }

    /// Returns `true` when admins pass task ownership checks.
    #[must_use]
    pub const fn admin_overrides_tasks(&self) -> bool {
        self.admin_overrides_tasks
    }

    /// Returns `true` when admins pass category ownership checks.
    #[must_use]
    pub const fn admin_overrides_categories(&self) -> bool {
        self.admin_overrides_categories
    }
}

impl Default for AccessPolicy {
    /// Returns the documented default: admins override task ownership but
    /// not category ownership.
    fn default() -> Self {
        Self::new(true, false)
    }
}
