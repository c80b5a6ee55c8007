//! Content service port.
//!
//! The content service owns persistence; the carousel only reads an ordered
//! slide list and the details of one project at a time.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CategoryFilter, ProjectDetails, ProjectId, SlideCollection};

/// Errors surfaced by a content service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// No project with the requested id.
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    /// The service could not be reached or answered with an error.
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete in time.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContentError {
    /// Message shown to the user in place of the details.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Project not found",
            Self::Network(_) | Self::Timeout(_) | Self::Storage(_) => {
                "Error loading project details."
            }
        }
    }
}

/// Read-only access to portfolio content for the presentation layer.
#[async_trait]
pub trait ContentServicePort: Send + Sync {
    /// Visible slides for `filter`, newest first.
    async fn list_slides(&self, filter: &CategoryFilter) -> Result<SlideCollection, ContentError>;

    /// Everything the details modal shows for one project.
    async fn get_project_details(&self, id: ProjectId) -> Result<ProjectDetails, ContentError>;
}
