//! In-memory repository for category tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::category::{
    domain::{Category, CategoryId},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<InMemoryCategoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryCategoryState {
    categories: HashMap<CategoryId, Category>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty in-memory category repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.categories.contains_key(&category.id()) {
            return Err(CategoryRepositoryError::DuplicateCategory(category.id()));
        }

        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.categories.contains_key(&category.id()) {
            return Err(CategoryRepositoryError::NotFound(category.id()));
        }

        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn remove(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        state
            .categories
            .remove(&id)
            .ok_or(CategoryRepositoryError::NotFound(id))?;
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.categories.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: UserId) -> CategoryRepositoryResult<Vec<Category>> {
        let state = self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut categories: Vec<Category> = state
            .categories
            .values()
            .filter(|category| category.owner() == owner)
            .cloned()
            .collect();
        categories.sort_by(|a, b| {
            a.name()
                .as_str()
                .cmp(b.name().as_str())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(categories)
    }

    async fn remove_by_owner(&self, owner: UserId) -> CategoryRepositoryResult<u64> {
        let mut state = self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut removed = 0_u64;
        state.categories.retain(|_, category| {
            if category.owner() == owner {
                removed += 1;
                false
            } else {
                true
            }
        });
        Ok(removed)
    }
}
