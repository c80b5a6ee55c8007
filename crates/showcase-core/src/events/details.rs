//! Details modal events.

use super::CarouselEvent;
use crate::domain::{ProjectDetails, ProjectId};

impl CarouselEvent {
    /// Create a details requested event.
    pub const fn request_details(project_id: ProjectId) -> Self {
        Self::RequestDetails { project_id }
    }

    /// Create a details loading event.
    pub const fn details_loading(project_id: ProjectId, request: u64) -> Self {
        Self::DetailsLoading {
            project_id,
            request,
        }
    }

    /// Create a details loaded event.
    pub const fn details_loaded(request: u64, details: ProjectDetails) -> Self {
        Self::DetailsLoaded { request, details }
    }

    /// Create a details failed event.
    pub fn details_failed(project_id: ProjectId, request: u64, message: impl Into<String>) -> Self {
        Self::DetailsFailed {
            project_id,
            request,
            message: message.into(),
        }
    }
}
