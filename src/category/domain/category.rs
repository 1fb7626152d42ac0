//! Category aggregate root.

use super::{CategoryDescription, CategoryId, CategoryName, HexColor};
use crate::account::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Category aggregate root.
///
/// The owner is fixed at creation and never reassigned; name, color, and
/// description may change over the category's life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    owner: UserId,
    name: CategoryName,
    color: HexColor,
    description: Option<CategoryDescription>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCategoryData {
    /// Persisted category identifier.
    pub id: CategoryId,
    /// Persisted owner identifier.
    pub owner: UserId,
    /// Persisted display name.
    pub name: CategoryName,
    /// Persisted display color.
    pub color: HexColor,
    /// Persisted description, if any.
    pub description: Option<CategoryDescription>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new category owned by `owner`.
    #[must_use]
    pub fn new(
        owner: UserId,
        name: CategoryName,
        color: HexColor,
        description: Option<CategoryDescription>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: CategoryId::new(),
            owner,
            name,
            color,
            description,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCategoryData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            name: data.name,
            color: data.color,
            description: data.description,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Returns the display color.
    #[must_use]
    pub const fn color(&self) -> &HexColor {
        &self.color
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&CategoryDescription> {
        self.description.as_ref()
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

    /// Replaces the display name.
    pub fn rename(&mut self, name: CategoryName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the display color.
    pub fn recolor(&mut self, color: HexColor, clock: &impl Clock) {
        self.color = color;
        self.touch(clock);
    }

    /// Replaces or clears the description.
    pub fn set_description(
        &mut self,
        description: Option<CategoryDescription>,
        clock: &impl Clock,
    ) {
        self.description = description;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
