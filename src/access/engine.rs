//! Capability checks over acting user and resource.

use super::AccessPolicy;
use crate::account::domain::{User, UserId};
use crate::category::domain::Category;
use crate::task::domain::Task;

/// Pure authorization decisions for tasks and categories.
///
/// Every check is a function of the acting user, the resource, and the
/// configured [`AccessPolicy`]; nothing is read from ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessEngine {
    policy: AccessPolicy,
}

impl AccessEngine {
    /// Creates an engine with the given policy.
    #[must_use]
    pub const fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    /// Returns the configured policy.
    #[must_use]
    pub const fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Returns `true` when `actor` may view `task`.
    #[must_use]
    pub fn can_view_task(&self, actor: &User, task: &Task) -> bool {
        owns_or_overrides(actor, task.owner(), self.policy.admin_overrides_tasks())
    }

    /// Returns `true` when `actor` may edit `task`.
    #[must_use]
    pub fn can_edit_task(&self, actor: &User, task: &Task) -> bool {
        owns_or_overrides(actor, task.owner(), self.policy.admin_overrides_tasks())
    }

    /// Returns `true` when `actor` may delete `task`.
    ///
    /// Deletion follows the edit rule.
    #[must_use]
    pub fn can_delete_task(&self, actor: &User, task: &Task) -> bool {
        self.can_edit_task(actor, task)
    }

    /// Returns `true` when `actor` may view `category`.
    #[must_use]
    pub fn can_view_category(&self, actor: &User, category: &Category) -> bool {
        owns_or_overrides(
            actor,
            category.owner(),
            self.policy.admin_overrides_categories(),
        )
    }

    /// Returns `true` when `actor` may edit `category`.
    #[must_use]
    pub fn can_edit_category(&self, actor: &User, category: &Category) -> bool {
        owns_or_overrides(
            actor,
            category.owner(),
            self.policy.admin_overrides_categories(),
        )
    }

    /// Returns `true` when `actor` may delete `category`.
    ///
    /// Deletion follows the edit rule.
    #[must_use]
    pub fn can_delete_category(&self, actor: &User, category: &Category) -> bool {
        self.can_edit_category(actor, category)
    }

    /// Returns `true` when `actor` and `target` are the same account.
    ///
    /// Adapters call this before dispatching destructive self-targeting
    /// admin actions (deactivate, demote, delete); the account service
    /// enforces the same contract before touching persistence.
    #[must_use]
    pub fn is_self(actor: &User, target: &User) -> bool {
        actor.id() == target.id()
    }
}

/// Owner always passes; the admin role passes when the override applies.
fn owns_or_overrides(actor: &User, owner: UserId, admin_override: bool) -> bool {
    owner == actor.id() || (admin_override && actor.is_admin())
}
