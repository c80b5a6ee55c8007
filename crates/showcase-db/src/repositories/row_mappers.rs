//! Row types and mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use showcase_core::domain::{
    Category, Project, ProjectDetails, ProjectId, SlideDraft, parse_image_list,
};
use showcase_core::{RepositoryError, resolve_video};

/// Shared SELECT column list for project queries.
pub const PROJECT_SELECT_COLUMNS: &str =
    "id, title, description, images, video_url, project_link, category_id, created_at";

/// Storage format for timestamps. Lexicographic order matches time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub images: String,
    pub video_url: Option<String>,
    pub project_link: String,
    pub category_id: Option<i64>,
    pub created_at: String,
}

#[derive(sqlx::FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: String,
}

/// A project joined with its category, as read by the content service.
#[derive(sqlx::FromRow)]
pub struct ShowcaseRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub images: String,
    pub video_url: Option<String>,
    pub project_link: String,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp, accepting both our format and `CURRENT_TIMESTAMP`.
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    let trimmed = raw.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .unwrap_or_else(|_| Utc::now())
}

pub fn row_to_project(row: ProjectRow) -> Project {
    Project {
        id: ProjectId(row.id),
        title: row.title,
        description: row.description,
        images: parse_image_list(&row.images),
        video_url: row.video_url.filter(|url| !url.trim().is_empty()),
        project_link: row.project_link,
        category_id: row.category_id,
        created_at: parse_timestamp(&row.created_at),
    }
}

pub fn row_to_category(row: CategoryRow) -> Category {
    Category {
        id: row.id,
        name: row.name,
        slug: row.slug,
        created_at: parse_timestamp(&row.created_at),
    }
}

/// Project a stored row into an unvalidated slide.
///
/// The first image becomes the thumbnail; a project without images yields a
/// draft that fails validation.
pub fn row_to_slide_draft(row: &ShowcaseRow) -> SlideDraft {
    let video = row
        .video_url
        .as_deref()
        .map(resolve_video)
        .filter(showcase_core::VideoDescriptor::is_playable);

    SlideDraft {
        id: Some(ProjectId(row.id)),
        title: Some(row.title.clone()),
        thumbnail_url: parse_image_list(&row.images).into_iter().next(),
        video,
        category_tag: row.category_slug.clone(),
    }
}

pub fn row_to_details(row: ShowcaseRow) -> ProjectDetails {
    ProjectDetails {
        id: ProjectId(row.id),
        title: row.title,
        description_html: row.description,
        category_name: row.category_name,
        project_link: Some(row.project_link).filter(|link| !link.trim().is_empty()),
        images: parse_image_list(&row.images),
    }
}

/// Map `sqlx` errors to `RepositoryError`.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        return RepositoryError::AlreadyExists(msg);
    }
    if msg.contains("FOREIGN KEY constraint failed") {
        return RepositoryError::Constraint(msg);
    }
    RepositoryError::Storage(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::VideoKind;

    fn showcase_row() -> ShowcaseRow {
        ShowcaseRow {
            id: 7,
            title: "Atlas".to_string(),
            description: "<p>Brand refresh</p>".to_string(),
            images: "a.jpg, b.jpg".to_string(),
            video_url: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            project_link: String::new(),
            category_name: Some("Web Design".to_string()),
            category_slug: Some("web-design".to_string()),
        }
    }

    #[test]
    fn test_timestamp_round_trip_and_sqlite_default() {
        let at = parse_timestamp("2024-03-01 10:20:30.123456");
        assert_eq!(format_timestamp(at), "2024-03-01 10:20:30.123456");

        let default = parse_timestamp("2024-03-01 10:20:30");
        assert_eq!(format_timestamp(default), "2024-03-01 10:20:30.000000");
    }

    #[test]
    fn test_slide_draft_uses_first_image_and_resolves_video() {
        let draft = row_to_slide_draft(&showcase_row());
        assert_eq!(draft.thumbnail_url.as_deref(), Some("a.jpg"));
        assert_eq!(draft.category_tag.as_deref(), Some("web-design"));
        let video = draft.video.unwrap();
        assert_eq!(video.kind, VideoKind::Youtube);
        assert!(video.playable_url.contains("youtube.com/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_details_drop_empty_link() {
        let details = row_to_details(showcase_row());
        assert_eq!(details.project_link, None);
        assert_eq!(details.images.len(), 2);
        assert_eq!(details.category_name.as_deref(), Some("Web Design"));
    }
}
