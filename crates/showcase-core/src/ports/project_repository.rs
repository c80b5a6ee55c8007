//! Project repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProject, Project, ProjectId};

/// Repository for project persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Validation belongs in `ProjectService`, not here
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List all projects, newest first.
    async fn list(&self) -> Result<Vec<Project>, RepositoryError>;

    /// Get a project by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the project doesn't exist.
    async fn get(&self, id: ProjectId) -> Result<Project, RepositoryError>;

    /// Insert a new project and return it with its assigned id.
    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError>;

    /// Replace the editable fields of an existing project.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the project doesn't exist.
    async fn update(&self, id: ProjectId, project: &NewProject) -> Result<Project, RepositoryError>;

    /// Delete a project by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the project doesn't exist.
    async fn delete(&self, id: ProjectId) -> Result<(), RepositoryError>;
}
