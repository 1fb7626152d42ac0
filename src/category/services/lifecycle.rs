//! Category lifecycle service.
//!
//! Categories are a thin aggregate, so the service is mostly plumbing:
//! validation into [`ValidationErrors`], capability checks through the
//! [`AccessEngine`], and the one business rule with teeth, refusing to
//! delete a category that still has tasks.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::access::AccessEngine;
use crate::account::domain::User;
use crate::category::domain::{Category, CategoryDescription, CategoryId, CategoryName, HexColor};
use crate::category::ports::{CategoryRepository, CategoryRepositoryError};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::validation::ValidationErrors;

/// Request payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    name: String,
    color: Option<String>,
    description: Option<String>,
}

impl CreateCategoryRequest {
    /// Creates a request with the given name, the default color and no
    /// description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            description: None,
        }
    }

    /// Sets a `#rrggbb` display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for partially updating a category.
///
/// Absent fields keep their current value; the description distinguishes
/// "leave alone" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCategoryRequest {
    name: Option<String>,
    color: Option<String>,
    description: Option<Option<String>>,
}

impl UpdateCategoryRequest {
    /// Creates an empty request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }
}

/// A category paired with the number of tasks currently assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTaskCount {
    /// The category.
    pub category: Category,
    /// Number of tasks assigned to it, any status.
    pub task_count: u64,
}

/// Errors surfaced by the category service.
#[derive(Debug, Error)]
pub enum CategoryServiceError {
    /// One or more request fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// No category exists under the given identifier.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
    /// The category still has tasks assigned and cannot be deleted.
    #[error("category {id} still has {task_count} task(s) assigned")]
    CategoryNotEmpty {
        /// Identifier of the non-empty category.
        id: CategoryId,
        /// Number of tasks still assigned.
        task_count: u64,
    },
    /// The acting user lacks the capability for this operation.
    #[error("not allowed to {action} this category")]
    Forbidden {
        /// Capability that was denied.
        action: &'static str,
    },
    /// The category repository failed.
    #[error(transparent)]
    Repository(#[from] CategoryRepositoryError),
    /// The task repository failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
}

/// Convenient result alias for category service operations.
pub type CategoryServiceResult<T> = Result<T, CategoryServiceError>;

/// Coordinates category mutations and listings.
pub struct CategoryLifecycleService<G, T, C>
where
    G: CategoryRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    categories: Arc<G>,
    tasks: Arc<T>,
    engine: AccessEngine,
    clock: Arc<C>,
}

impl<G, T, C> CategoryLifecycleService<G, T, C>
where
    G: CategoryRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service over the given repositories, access engine and
    /// clock.
    pub const fn new(
        categories: Arc<G>,
        tasks: Arc<T>,
        engine: AccessEngine,
        clock: Arc<C>,
    ) -> Self {
        Self {
            categories,
            tasks,
            engine,
            clock,
        }
    }

    /// Creates a category owned by the acting user.
    ///
    /// An absent color falls back to the default palette entry.
    ///
    /// # Errors
    /// Returns [`CategoryServiceError::Validation`] for field problems and
    /// repository errors otherwise.
    pub async fn create_category(
        &self,
        actor: &User,
        request: CreateCategoryRequest,
    ) -> CategoryServiceResult<Category> {
        let CreateCategoryRequest {
            name: raw_name,
            color: raw_color,
            description: raw_description,
        } = request;

        let mut errors = ValidationErrors::new();
        let checked_name = errors.check("name", CategoryName::new(raw_name));
        let checked_color = raw_color.map_or_else(
            || Some(HexColor::default()),
            |raw| errors.check("color", HexColor::new(raw)),
        );
        let description = raw_description
            .and_then(|raw| errors.check("description", CategoryDescription::new(raw)));
        errors.into_result()?;
        let (Some(name), Some(color)) = (checked_name, checked_color) else {
            return Err(ValidationErrors::single("name", "must not be empty").into());
        };

        let category = Category::new(actor.id(), name, color, description, &*self.clock);
        self.categories.store(&category).await?;
        tracing::info!(category = %category.id(), owner = %actor.id(), "Created category");
        Ok(category)
    }

    /// Applies a partial update to a category.
    ///
    /// # Errors
    /// Returns [`CategoryServiceError::CategoryNotFound`] when the category
    /// does not exist, [`CategoryServiceError::Forbidden`] when the acting
    /// user may not edit it and [`CategoryServiceError::Validation`] for
    /// field problems.
    pub async fn update_category(
        &self,
        actor: &User,
        id: CategoryId,
        request: UpdateCategoryRequest,
    ) -> CategoryServiceResult<Category> {
        let mut category = self.find_existing(id).await?;
        if !self.engine.can_edit_category(actor, &category) {
            return Err(CategoryServiceError::Forbidden { action: "edit" });
        }

        let UpdateCategoryRequest {
            name: raw_name,
            color: raw_color,
            description: raw_description,
        } = request;

        let mut errors = ValidationErrors::new();
        let name = raw_name.and_then(|raw| errors.check("name", CategoryName::new(raw)));
        let color = raw_color.and_then(|raw| errors.check("color", HexColor::new(raw)));
        let description = match raw_description {
            Some(Some(raw)) => errors
                .check("description", CategoryDescription::new(raw))
                .map(Some),
            Some(None) => Some(None),
            None => None,
        };
        errors.into_result()?;

        if let Some(new_name) = name {
            category.rename(new_name, &*self.clock);
        }
        if let Some(new_color) = color {
            category.recolor(new_color, &*self.clock);
        }
        if let Some(new_description) = description {
            category.set_description(new_description, &*self.clock);
        }
        self.categories.update(&category).await?;
        tracing::info!(category = %category.id(), "Updated category");
        Ok(category)
    }

    /// Deletes a category that has no tasks assigned.
    ///
    /// # Errors
    /// Returns [`CategoryServiceError::CategoryNotFound`] when the category
    /// does not exist, [`CategoryServiceError::Forbidden`] when the acting
    /// user may not delete it and [`CategoryServiceError::CategoryNotEmpty`]
    /// when tasks are still assigned.
    pub async fn delete_category(&self, actor: &User, id: CategoryId) -> CategoryServiceResult<()> {
        let category = self.find_existing(id).await?;
        if !self.engine.can_delete_category(actor, &category) {
            return Err(CategoryServiceError::Forbidden { action: "delete" });
        }
        let task_count = self.tasks.count_in_category(id).await?;
        if task_count > 0 {
            return Err(CategoryServiceError::CategoryNotEmpty { id, task_count });
        }
        self.categories.remove(id).await?;
        tracing::info!(category = %id, "Deleted category");
        Ok(())
    }

    /// Looks up a single category on behalf of the acting user.
    ///
    /// # Errors
    /// Returns [`CategoryServiceError::CategoryNotFound`] when no category
    /// exists under the identifier and [`CategoryServiceError::Forbidden`]
    /// when one exists but the acting user may not view it.
    pub async fn find_category(
        &self,
        actor: &User,
        id: CategoryId,
    ) -> CategoryServiceResult<Category> {
        let category = self.find_existing(id).await?;
        if !self.engine.can_view_category(actor, &category) {
            return Err(CategoryServiceError::Forbidden { action: "view" });
        }
        Ok(category)
    }

    /// Lists the acting user's categories, name ascending.
    ///
    /// # Errors
    /// Returns a repository error when the lookup fails.
    pub async fn list_categories(&self, actor: &User) -> CategoryServiceResult<Vec<Category>> {
        Ok(self.categories.find_by_owner(actor.id()).await?)
    }

    /// Lists the acting user's categories with their task counts, name
    /// ascending.
    ///
    /// Categories without tasks report a count of zero.
    ///
    /// # Errors
    /// Returns a repository error when either lookup fails.
    pub async fn list_with_task_counts(
        &self,
        actor: &User,
    ) -> CategoryServiceResult<Vec<CategoryTaskCount>> {
        let categories = self.categories.find_by_owner(actor.id()).await?;
        let counts = self.tasks.count_by_category(actor.id()).await?;
        Ok(categories
            .into_iter()
            .map(|category| {
                let task_count = counts.get(&category.id()).copied().unwrap_or(0);
                CategoryTaskCount {
                    category,
                    task_count,
                }
            })
            .collect())
    }

    async fn find_existing(&self, id: CategoryId) -> CategoryServiceResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(CategoryServiceError::CategoryNotFound(id))
    }
}
