//! `SQLite` implementation of the project repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use showcase_core::domain::{NewProject, Project, ProjectId, join_image_list};
use showcase_core::ports::{ProjectRepository, RepositoryError};

use super::row_mappers::{
    PROJECT_SELECT_COLUMNS, ProjectRow, format_timestamp, map_sqlx_error, row_to_project,
};

/// `SQLite` implementation of the project repository.
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    /// Create a new `SQLite` project repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_SELECT_COLUMNS} FROM projects ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_project).collect())
    }

    async fn get(&self, id: ProjectId) -> Result<Project, RepositoryError> {
        sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_SELECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .map(row_to_project)
        .ok_or_else(|| RepositoryError::NotFound(format!("Project {id}")))
    }

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, images, video_url, project_link, category_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(join_image_list(&project.images))
        .bind(&project.video_url)
        .bind(&project.project_link)
        .bind(project.category_id)
        .bind(format_timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get(ProjectId(result.last_insert_rowid())).await
    }

    async fn update(&self, id: ProjectId, project: &NewProject) -> Result<Project, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, images = ?, video_url = ?, project_link = ?, category_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(join_image_list(&project.images))
        .bind(&project.video_url)
        .bind(&project.project_link)
        .bind(project.category_id)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Project {id}")));
        }
        self.get(id).await
    }

    async fn delete(&self, id: ProjectId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Project {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    fn project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "<p>Case study</p>".to_string(),
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            video_url: None,
            project_link: "https://example.com".to_string(),
            category_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = SqliteProjectRepository::new(setup_test_database().await.unwrap());
        let created = repo.insert(&project("Atlas")).await.unwrap();
        assert_eq!(created.title, "Atlas");
        assert_eq!(created.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert_eq!(created.thumbnail(), Some("a.jpg"));

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = SqliteProjectRepository::new(setup_test_database().await.unwrap());
        let first = repo.insert(&project("First")).await.unwrap();
        let second = repo.insert(&project("Second")).await.unwrap();

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let repo = SqliteProjectRepository::new(setup_test_database().await.unwrap());
        assert!(matches!(
            repo.update(ProjectId(99), &project("Ghost")).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let repo = SqliteProjectRepository::new(setup_test_database().await.unwrap());
        let created = repo.insert(&project("Atlas")).await.unwrap();
        let updated = repo
            .update(
                created.id,
                &NewProject {
                    video_url: Some("https://vimeo.com/123".to_string()),
                    ..project("Atlas v2")
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Atlas v2");
        assert_eq!(updated.video_url.as_deref(), Some("https://vimeo.com/123"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = SqliteProjectRepository::new(setup_test_database().await.unwrap());
        let created = repo.insert(&project("Atlas")).await.unwrap();
        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.get(created.id).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete(created.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
