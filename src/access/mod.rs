//! Ownership-based authorization for tasks and categories.
//!
//! The access module decides, without side effects or I/O, whether an acting
//! user may view, edit, or delete a resource. Owners always pass; the admin
//! role passes only where the configured [`AccessPolicy`] says so. Category
//! ownership and task ownership carry independent override flags because the
//! two resources follow different rules by default: admins may manage any
//! user's tasks but nobody touches a category they do not own.
//!
//! Denial here is absolute. There is no fallback rule, and whether adapters
//! report a denial as forbidden or mask it as not-found is presentation
//! policy outside this module.

mod engine;
mod policy;

pub use engine::AccessEngine;
pub use policy::AccessPolicy;

#[cfg(test)]
mod tests;
