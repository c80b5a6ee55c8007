//! Category filtering and carousel/grid view switching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::controller::CarouselController;
use crate::domain::{CategoryFilter, SlideCollection};
use crate::events::CarouselEvent;

/// Presentation mode of the showcase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Carousel,
    Grid,
}

impl ViewMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carousel => "carousel",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carousel" => Ok(Self::Carousel),
            "grid" => Ok(Self::Grid),
            other => Err(format!("Unknown view mode: {other}")),
        }
    }
}

/// Owns the unfiltered slide list and feeds the filtered subset to the
/// controller.
pub struct FilterViewToggle {
    controller: CarouselController,
    source: SlideCollection,
    filter: CategoryFilter,
    mode: ViewMode,
}

impl FilterViewToggle {
    /// Wrap `controller`, whose current collection becomes the unfiltered
    /// source.
    pub fn new(controller: CarouselController, mode: ViewMode) -> Self {
        let source = controller.slides();
        controller.set_carousel_visible(mode == ViewMode::Carousel);
        Self {
            controller,
            source,
            filter: CategoryFilter::All,
            mode,
        }
    }

    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The unfiltered collection.
    pub const fn source(&self) -> &SlideCollection {
        &self.source
    }

    /// Show only slides matching `filter` and reset to the first one.
    ///
    /// Returns the number of visible slides.
    pub fn apply_filter(&mut self, filter: CategoryFilter) -> usize {
        let visible = self.source.filtered(&filter);
        let count = visible.len();
        info!(%filter, visible = count, "Applying category filter");

        self.controller.replace_collection(visible);
        self.controller
            .emit(CarouselEvent::filter_applied(filter.clone(), count));
        self.filter = filter;

        if self.mode == ViewMode::Carousel {
            self.controller.restart_autoplay();
        }
        count
    }

    /// Swap in a fresh unfiltered collection, keeping the current filter.
    pub fn replace_source(&mut self, source: SlideCollection) -> usize {
        self.source = source;
        self.apply_filter(self.filter.clone())
    }

    /// Switch between carousel and grid presentation.
    ///
    /// Returns `false` when `mode` is already active.
    pub fn switch_view(&mut self, mode: ViewMode) -> bool {
        if mode == self.mode {
            debug!(%mode, "View already active");
            return false;
        }
        info!(from = %self.mode, to = %mode, "Switching view");
        self.mode = mode;
        self.controller.emit(CarouselEvent::view_changed(mode));
        self.controller
            .set_carousel_visible(mode == ViewMode::Carousel);
        true
    }
}
