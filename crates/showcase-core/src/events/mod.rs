//! Canonical event union emitted by the carousel engine.
//!
//! Hosts subscribe to these through a
//! [`CarouselEventEmitter`](crate::ports::CarouselEventEmitter) and update
//! their markup accordingly. The engine never touches markup itself.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag and camelCase fields:
//!
//! ```json
//! { "type": "slide_changed", "index": 3, "projectId": 42 }
//! ```

mod details;
mod render;

use serde::{Deserialize, Serialize};

use crate::carousel::{NowPlaying, ViewMode};
use crate::domain::{CategoryFilter, ProjectDetails, ProjectId};

pub use render::{RenderSnapshot, RenderedSlide};

/// Events emitted by a mounted showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselEvent {
    // ========== Carousel ==========
    /// The render state changed; redraw every slide.
    Render { snapshot: RenderSnapshot },

    /// The active slide changed.
    SlideChanged {
        index: usize,
        #[serde(rename = "projectId")]
        project_id: ProjectId,
    },

    /// Autoplay timer started.
    AutoplayStarted {
        #[serde(rename = "delayMs")]
        delay_ms: u64,
    },

    /// Autoplay timer stopped.
    AutoplayStopped,

    // ========== Media ==========
    /// The active slide started playing its video.
    MediaStarted { playing: NowPlaying },

    /// Playback was stopped and the player source cleared.
    MediaStopped {
        #[serde(rename = "projectId")]
        project_id: ProjectId,
    },

    // ========== View ==========
    /// The presentation mode changed.
    ViewChanged { mode: ViewMode },

    /// A category filter was applied.
    FilterApplied {
        filter: CategoryFilter,
        /// Number of slides left visible.
        visible: usize,
    },

    // ========== Details modal ==========
    /// The user asked to see a project's details.
    RequestDetails {
        #[serde(rename = "projectId")]
        project_id: ProjectId,
    },

    /// Details are being fetched; show a loading state.
    DetailsLoading {
        #[serde(rename = "projectId")]
        project_id: ProjectId,
        request: u64,
    },

    /// Details arrived for the latest request.
    DetailsLoaded { request: u64, details: ProjectDetails },

    /// Details could not be loaded; show `message` in the modal.
    DetailsFailed {
        #[serde(rename = "projectId")]
        project_id: ProjectId,
        request: u64,
        message: String,
    },

    /// The details modal was closed.
    ModalClosed,
}

impl CarouselEvent {
    /// Get the event name for wire protocols.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Render { .. } => "carousel:render",
            Self::SlideChanged { .. } => "carousel:slide_changed",
            Self::AutoplayStarted { .. } => "carousel:autoplay_started",
            Self::AutoplayStopped => "carousel:autoplay_stopped",
            Self::MediaStarted { .. } => "media:started",
            Self::MediaStopped { .. } => "media:stopped",
            Self::ViewChanged { .. } => "view:changed",
            Self::FilterApplied { .. } => "view:filter_applied",
            Self::RequestDetails { .. } => "details:requested",
            Self::DetailsLoading { .. } => "details:loading",
            Self::DetailsLoaded { .. } => "details:loaded",
            Self::DetailsFailed { .. } => "details:failed",
            Self::ModalClosed => "details:closed",
        }
    }

    /// Create a media started event.
    pub const fn media_started(playing: NowPlaying) -> Self {
        Self::MediaStarted { playing }
    }

    /// Create a media stopped event.
    pub const fn media_stopped(project_id: ProjectId) -> Self {
        Self::MediaStopped { project_id }
    }

    /// Create a view changed event.
    pub const fn view_changed(mode: ViewMode) -> Self {
        Self::ViewChanged { mode }
    }

    /// Create a filter applied event.
    pub const fn filter_applied(filter: CategoryFilter, visible: usize) -> Self {
        Self::FilterApplied { filter, visible }
    }
}
