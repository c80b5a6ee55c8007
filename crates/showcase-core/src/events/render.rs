//! Render snapshots: what the host draws after each state change.

use serde::{Deserialize, Serialize};

use super::CarouselEvent;
use crate::carousel::{CarouselState, Layout, Position};
use crate::domain::ProjectId;

/// One slide as the host should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSlide {
    pub project_id: ProjectId,
    pub index: usize,
    pub position: Position,
    /// Class name for `position`, e.g. `prev-1`.
    pub css_class: String,
    pub playing: bool,
    pub has_video: bool,
}

/// Full render state of a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub state: CarouselState,
    pub layout: Layout,
    pub slides: Vec<RenderedSlide>,
    /// Title of the active slide, shown below the carousel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl RenderSnapshot {
    /// The active slide, if any.
    pub fn active(&self) -> Option<&RenderedSlide> {
        self.slides
            .iter()
            .find(|slide| slide.position == Position::Active)
    }

    pub fn position_of(&self, project_id: ProjectId) -> Option<Position> {
        self.slides
            .iter()
            .find(|slide| slide.project_id == project_id)
            .map(|slide| slide.position)
    }
}

impl CarouselEvent {
    /// Create a render event.
    pub const fn render(snapshot: RenderSnapshot) -> Self {
        Self::Render { snapshot }
    }

    /// Create a slide changed event.
    pub const fn slide_changed(index: usize, project_id: ProjectId) -> Self {
        Self::SlideChanged { index, project_id }
    }
}
