//! `SQLite` implementation of the read-only content service.
//!
//! Projects are joined with their category; the category slug becomes the
//! slide's filter tag.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::warn;

use showcase_core::domain::{CategoryFilter, ProjectDetails, ProjectId, SlideCollection};
use showcase_core::ports::{ContentError, ContentServicePort};

use super::row_mappers::{ShowcaseRow, row_to_details, row_to_slide_draft};

const SHOWCASE_SELECT: &str = r#"
    SELECT p.id, p.title, p.description, p.images, p.video_url, p.project_link,
           c.name AS category_name, c.slug AS category_slug
    FROM projects p
    LEFT JOIN categories c ON p.category_id = c.id
"#;

/// Serves slides and project details straight from the database.
pub struct SqliteContentService {
    pool: SqlitePool,
}

impl SqliteContentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> ContentError {
    ContentError::Storage(e.to_string())
}

#[async_trait]
impl ContentServicePort for SqliteContentService {
    async fn list_slides(&self, filter: &CategoryFilter) -> Result<SlideCollection, ContentError> {
        let rows = sqlx::query_as::<_, ShowcaseRow>(&format!(
            "{SHOWCASE_SELECT} ORDER BY p.created_at DESC, p.id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        let (slides, skipped) = SlideCollection::from_drafts(rows.iter().map(row_to_slide_draft));
        for error in &skipped {
            warn!(%error, "Skipping project that cannot be shown as a slide");
        }
        Ok(slides.filtered(filter))
    }

    async fn get_project_details(&self, id: ProjectId) -> Result<ProjectDetails, ContentError> {
        sqlx::query_as::<_, ShowcaseRow>(&format!("{SHOWCASE_SELECT} WHERE p.id = ?"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .map(row_to_details)
            .ok_or(ContentError::NotFound(id))
    }
}
