//! Project service - validated project administration.

use std::sync::Arc;

use tracing::info;

use crate::domain::{NewProject, Project, ProjectId};
use crate::ports::{CategoryRepository, CoreError, ProjectRepository, RepositoryError};

/// Service for project operations.
pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { repo, categories }
    }

    /// All projects, newest first.
    pub async fn list(&self) -> Result<Vec<Project>, CoreError> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: ProjectId) -> Result<Project, CoreError> {
        Ok(self.repo.get(id).await?)
    }

    /// Validate and store a new project.
    pub async fn create(&self, project: NewProject) -> Result<Project, CoreError> {
        let project = project.normalized()?;
        self.check_category(project.category_id).await?;
        let created = self.repo.insert(&project).await?;
        info!(id = %created.id, title = %created.title, "Project created");
        Ok(created)
    }

    /// Validate and replace an existing project's fields.
    pub async fn update(&self, id: ProjectId, project: NewProject) -> Result<Project, CoreError> {
        let project = project.normalized()?;
        self.check_category(project.category_id).await?;
        let updated = self.repo.update(id, &project).await?;
        info!(%id, "Project updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: ProjectId) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        info!(%id, "Project deleted");
        Ok(())
    }

    async fn check_category(&self, category_id: Option<i64>) -> Result<(), CoreError> {
        let Some(category_id) = category_id else {
            return Ok(());
        };
        match self.categories.get(category_id).await {
            Ok(_) => Ok(()),
            Err(RepositoryError::NotFound(_)) => Err(CoreError::Validation(format!(
                "Unknown category id: {category_id}"
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectValidationError;
    use crate::testing::{MemoryCategoryRepository, MemoryProjectRepository, new_project};

    fn service() -> (ProjectService, Arc<MemoryCategoryRepository>) {
        let categories = Arc::new(MemoryCategoryRepository::default());
        let service = ProjectService::new(
            Arc::new(MemoryProjectRepository::default()),
            categories.clone(),
        );
        (service, categories)
    }

    #[tokio::test]
    async fn test_create_trims_and_stores() {
        let (service, _) = service();
        let created = service
            .create(NewProject {
                title: "  Atlas  ".to_string(),
                images: vec![" a.jpg ".to_string(), String::new()],
                ..new_project("ignored")
            })
            .await
            .unwrap();
        assert_eq!(created.title, "Atlas");
        assert_eq!(created.images, vec!["a.jpg".to_string()]);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let (service, _) = service();
        let err = service
            .create(NewProject {
                images: Vec::new(),
                ..new_project("Atlas")
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidProject(ProjectValidationError::MissingImages)
        ));
        assert_eq!(err.to_string(), "At least one project image is required");
    }

    #[tokio::test]
    async fn test_unknown_category_rejected() {
        let (service, _) = service();
        let err = service
            .create(NewProject {
                category_id: Some(42),
                ..new_project("Atlas")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (service, _) = service();
        let created = service.create(new_project("Atlas")).await.unwrap();

        let updated = service
            .update(created.id, new_project("Atlas v2"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Atlas v2");
        assert_eq!(updated.created_at, created.created_at);

        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.get(created.id).await,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
    }
}
