//! Portfolio project and category domain types.
//!
//! These are the admin-side records behind the carousel. A [`Project`] is
//! projected into a [`SlideRecord`](super::SlideRecord) for display and into
//! [`ProjectDetails`] for the details modal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::slide::ProjectId;

/// A persisted portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Description as stored (may contain HTML).
    pub description: String,
    /// Image URLs in display order. The first one is the thumbnail.
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub project_link: String,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Input for creating or replacing a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub project_link: String,
    pub category_id: Option<i64>,
}

/// Why a project submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectValidationError {
    #[error("Project title is required")]
    MissingTitle,

    #[error("Project description is required")]
    MissingDescription,

    #[error("At least one project image is required")]
    MissingImages,

    #[error("Project link is required")]
    MissingLink,
}

impl NewProject {
    /// Trim fields, drop blank images and empty video URLs, then check
    /// required fields.
    pub fn normalized(mut self) -> Result<Self, ProjectValidationError> {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.project_link = self.project_link.trim().to_string();
        self.images = self
            .images
            .into_iter()
            .map(|image| image.trim().to_string())
            .filter(|image| !image.is_empty())
            .collect();
        self.video_url = self
            .video_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if self.title.is_empty() {
            return Err(ProjectValidationError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(ProjectValidationError::MissingDescription);
        }
        if self.images.is_empty() {
            return Err(ProjectValidationError::MissingImages);
        }
        if self.project_link.is_empty() {
            return Err(ProjectValidationError::MissingLink);
        }
        Ok(self)
    }
}

/// Split the stored comma-separated image list.
pub fn parse_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join images into the stored comma-separated form.
pub fn join_image_list(images: &[String]) -> String {
    images.join(",")
}

/// Everything the details modal shows for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub id: ProjectId,
    pub title: String,
    pub description_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,
    pub images: Vec<String>,
}

/// A project category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating or renaming a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

impl NewCategory {
    /// Build a category whose slug is derived from its name.
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            slug: slugify(name),
        }
    }
}

/// Lowercase ASCII slug with single dashes between words.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for ch in value.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewProject {
        NewProject {
            title: " Atlas ".to_string(),
            description: "<p>Brand refresh</p>".to_string(),
            images: vec![" a.jpg ".to_string(), String::new(), "b.jpg".to_string()],
            video_url: Some("   ".to_string()),
            project_link: "https://atlas.example.com".to_string(),
            category_id: None,
        }
    }

    #[test]
    fn test_normalized_trims_and_drops_blanks() {
        let project = valid().normalized().unwrap();
        assert_eq!(project.title, "Atlas");
        assert_eq!(project.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(project.video_url, None);
    }

    #[test]
    fn test_required_fields() {
        let mut p = valid();
        p.title = "  ".into();
        assert_eq!(p.normalized(), Err(ProjectValidationError::MissingTitle));

        let mut p = valid();
        p.description = String::new();
        assert_eq!(p.normalized(), Err(ProjectValidationError::MissingDescription));

        let mut p = valid();
        p.images = vec![" ".into()];
        assert_eq!(p.normalized(), Err(ProjectValidationError::MissingImages));

        let mut p = valid();
        p.project_link = String::new();
        assert_eq!(p.normalized(), Err(ProjectValidationError::MissingLink));
    }

    #[test]
    fn test_image_list_parsing() {
        assert_eq!(parse_image_list("a.jpg, b.jpg,,  "), vec!["a.jpg", "b.jpg"]);
        assert!(parse_image_list("").is_empty());
        assert_eq!(
            join_image_list(&["a.jpg".to_string(), "b.jpg".to_string()]),
            "a.jpg,b.jpg"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Web Design"), "web-design");
        assert_eq!(slugify("  UI / UX!! "), "ui-ux");
        assert_eq!(NewCategory::from_name("Branding").slug, "branding");
    }
}
