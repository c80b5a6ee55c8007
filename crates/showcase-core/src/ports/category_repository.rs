//! Category repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Category, NewCategory};

/// Repository for category persistence operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories ordered by name.
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Get a category by id.
    async fn get(&self, id: i64) -> Result<Category, RepositoryError>;

    /// Insert a new category.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the slug is taken.
    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError>;

    /// Rename a category or change its slug.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the new slug belongs
    /// to another category.
    async fn update(&self, id: i64, category: &NewCategory) -> Result<Category, RepositoryError>;

    /// Delete a category. Its projects become uncategorized.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
