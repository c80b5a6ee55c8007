#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod carousel;
pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use carousel::{
    CarouselController, CarouselState, ControllerPhase, DetailsLoader, DetailsOutcome,
    FilterViewToggle, ImageCarousel, KeyInput, KeyOutcome, Layout, MediaPlayer, ModalState,
    NavigationIntent, NowPlaying, PlayOutcome, Position, PositionResolver, Showcase,
    SwipeTracker, ViewMode,
};
pub use domain::{
    Category, CategoryFilter, NewCategory, NewProject, Project, ProjectDetails, ProjectId,
    ProjectValidationError, SlideCollection, SlideDraft, SlideRecord, SlideValidationError,
    VideoDescriptor, VideoKind,
};
pub use events::{CarouselEvent, RenderSnapshot, RenderedSlide};
pub use ports::{
    CarouselEventEmitter, CategoryRepository, ChannelEmitter, ContentError, ContentServicePort,
    CoreError, NoopEmitter, ProjectRepository, Repos, RepositoryError,
};
pub use services::{CategoryService, ProjectService, SettingsService, ShowcaseCore};
pub use settings::{
    CarouselConfig, SettingsError, ShowcaseSettings, ShowcaseSettingsUpdate, save_settings_file,
    validate_settings,
};
pub use utils::resolve_video;

// Silence unused dev-dependency warnings for test-only crates
#[cfg(test)]
use tempfile as _;
