//! Carousel state as exposed to hosts.

use serde::{Deserialize, Serialize};

/// Snapshot of the controller's state.
///
/// `current_index` is `None` exactly when `total == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    pub current_index: Option<usize>,
    pub total: usize,
    pub is_playing: bool,
    pub autoplay_enabled: bool,
}

/// Lifecycle phase of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    /// No slides: every operation is a no-op.
    Idle,
    /// At least one slide.
    Ready { autoplay_running: bool },
}

impl ControllerPhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}
