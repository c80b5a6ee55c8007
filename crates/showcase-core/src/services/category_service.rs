//! Category service - category administration.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Category, NewCategory};
use crate::ports::{CategoryRepository, CoreError};

/// Service for category operations.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Category>, CoreError> {
        Ok(self.repo.list().await?)
    }

    /// Create a category, deriving its slug from the name.
    pub async fn create(&self, name: &str) -> Result<Category, CoreError> {
        let category = Self::validated(name)?;
        let created = self.repo.insert(&category).await?;
        info!(id = created.id, slug = %created.slug, "Category created");
        Ok(created)
    }

    pub async fn rename(&self, id: i64, name: &str) -> Result<Category, CoreError> {
        let category = Self::validated(name)?;
        Ok(self.repo.update(id, &category).await?)
    }

    /// Delete a category; its projects become uncategorized.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        info!(id, "Category deleted");
        Ok(())
    }

    fn validated(name: &str) -> Result<NewCategory, CoreError> {
        let category = NewCategory::from_name(name);
        if category.name.is_empty() || category.slug.is_empty() {
            return Err(CoreError::Validation("Category name is required".to_string()));
        }
        Ok(category)
    }
}
