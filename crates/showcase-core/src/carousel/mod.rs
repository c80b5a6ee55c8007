//! Headless carousel engine.
//!
//! - [`position`]: index → visual slot mapping
//! - [`controller`]: navigation, autoplay and pause rules
//! - [`media`]: single-player video bookkeeping
//! - [`view`]: category filter and carousel/grid toggle
//! - [`details`]: project details modal
//! - [`input`]: key and swipe mapping
//! - [`showcase`]: everything above mounted together

mod autoplay;
pub mod controller;
pub mod details;
pub mod input;
pub mod media;
pub mod position;
pub mod showcase;
mod state;
pub mod view;

pub use controller::CarouselController;
pub use details::{DetailsLoader, DetailsOutcome, ImageCarousel, ModalState};
pub use input::{KeyInput, NavigationIntent, SwipeTracker, swipe_intent};
pub use media::{MediaPlayer, NowPlaying, PlayOutcome};
pub use position::{Layout, Position, PositionResolver, circular_offset, resolve};
pub use showcase::{KeyOutcome, Showcase};
pub use state::{CarouselState, ControllerPhase};
pub use view::{FilterViewToggle, ViewMode};
