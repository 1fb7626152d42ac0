//! Repository port for category persistence.

use crate::account::domain::UserId;
use crate::category::domain::{Category, CategoryId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for category repository operations.
pub type CategoryRepositoryResult<T> = Result<T, CategoryRepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::DuplicateCategory`] when the
    /// category ID already exists.
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Persists changes to an existing category (name, color, description,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Removes a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn remove(&self, id: CategoryId) -> CategoryRepositoryResult<()>;

    /// Finds a category by identifier.
    ///
    /// Returns `None` when the category does not exist.
    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>>;

    /// Returns all categories owned by `owner`, name ascending (identifier
    /// ascending for equal names).
    async fn find_by_owner(&self, owner: UserId) -> CategoryRepositoryResult<Vec<Category>>;

    /// Removes every category owned by `owner`, returning the number
    /// removed.
    ///
    /// Used by account deletion; removing zero categories is not an error.
    async fn remove_by_owner(&self, owner: UserId) -> CategoryRepositoryResult<u64>;
}

/// Errors returned by category repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryRepositoryError {
    /// A category with the same identifier already exists.
    #[error("duplicate category identifier: {0}")]
    DuplicateCategory(CategoryId),

    /// The category was not found.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
