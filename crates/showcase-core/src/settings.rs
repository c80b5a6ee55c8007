//! Showcase settings types and validation.
//!
//! These mirror the carousel options an admin can change (timing, layout,
//! default view). All fields are optional so partial settings files and
//! partial updates fall back to defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::{Layout, ViewMode};

/// Default delay between automatic slide advances.
pub const DEFAULT_AUTO_SLIDE_DELAY_MS: u64 = 5000;

/// Default CSS transition duration handed to the host.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 600;

/// Default client-side timeout for the project details fetch.
pub const DEFAULT_DETAILS_TIMEOUT_MS: u64 = 10_000;

/// Default horizontal distance a touch must travel to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: u32 = 50;

/// Showcase settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShowcaseSettings {
    /// Milliseconds between automatic slide advances (1000-60000).
    pub auto_slide_delay_ms: Option<u64>,

    /// Whether the carousel advances on its own.
    pub auto_slide_enabled: Option<bool>,

    /// Slide transition duration in milliseconds (0-5000).
    pub transition_duration_ms: Option<u64>,

    /// Details fetch timeout in milliseconds (1000-120000).
    pub details_timeout_ms: Option<u64>,

    /// Minimum swipe distance in pixels (1-500).
    pub swipe_threshold_px: Option<u32>,

    /// Carousel layout strategy.
    pub layout: Option<Layout>,

    /// View shown when the showcase is mounted.
    pub default_view: Option<ViewMode>,
}

impl ShowcaseSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            auto_slide_delay_ms: Some(DEFAULT_AUTO_SLIDE_DELAY_MS),
            auto_slide_enabled: Some(true),
            transition_duration_ms: Some(DEFAULT_TRANSITION_DURATION_MS),
            details_timeout_ms: Some(DEFAULT_DETAILS_TIMEOUT_MS),
            swipe_threshold_px: Some(DEFAULT_SWIPE_THRESHOLD_PX),
            layout: Some(Layout::Coverflow),
            default_view: Some(ViewMode::Carousel),
        }
    }

    /// Get the effective autoplay delay (with default fallback).
    #[must_use]
    pub const fn effective_auto_slide_delay(&self) -> Duration {
        match self.auto_slide_delay_ms {
            Some(ms) => Duration::from_millis(ms),
            None => Duration::from_millis(DEFAULT_AUTO_SLIDE_DELAY_MS),
        }
    }

    /// Get the effective details timeout (with default fallback).
    #[must_use]
    pub const fn effective_details_timeout(&self) -> Duration {
        match self.details_timeout_ms {
            Some(ms) => Duration::from_millis(ms),
            None => Duration::from_millis(DEFAULT_DETAILS_TIMEOUT_MS),
        }
    }

    /// Resolve into the non-optional runtime configuration.
    #[must_use]
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            auto_slide_delay: self.effective_auto_slide_delay(),
            auto_slide_enabled: self.auto_slide_enabled.unwrap_or(true),
            transition_duration: Duration::from_millis(
                self.transition_duration_ms
                    .unwrap_or(DEFAULT_TRANSITION_DURATION_MS),
            ),
            details_timeout: self.effective_details_timeout(),
            swipe_threshold_px: self
                .swipe_threshold_px
                .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            layout: self.layout.unwrap_or_default(),
            default_view: self.default_view.unwrap_or_default(),
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &ShowcaseSettingsUpdate) {
        if let Some(delay) = other.auto_slide_delay_ms {
            self.auto_slide_delay_ms = delay;
        }
        if let Some(enabled) = other.auto_slide_enabled {
            self.auto_slide_enabled = enabled;
        }
        if let Some(duration) = other.transition_duration_ms {
            self.transition_duration_ms = duration;
        }
        if let Some(timeout) = other.details_timeout_ms {
            self.details_timeout_ms = timeout;
        }
        if let Some(threshold) = other.swipe_threshold_px {
            self.swipe_threshold_px = threshold;
        }
        if let Some(layout) = other.layout {
            self.layout = layout;
        }
        if let Some(view) = other.default_view {
            self.default_view = view;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset field to its default
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseSettingsUpdate {
    pub auto_slide_delay_ms: Option<Option<u64>>,
    pub auto_slide_enabled: Option<Option<bool>>,
    pub transition_duration_ms: Option<Option<u64>>,
    pub details_timeout_ms: Option<Option<u64>>,
    pub swipe_threshold_px: Option<Option<u32>>,
    pub layout: Option<Option<Layout>>,
    pub default_view: Option<Option<ViewMode>>,
}

impl ShowcaseSettingsUpdate {
    /// An update that resets every field to its default.
    pub const fn reset_all() -> Self {
        Self {
            auto_slide_delay_ms: Some(None),
            auto_slide_enabled: Some(None),
            transition_duration_ms: Some(None),
            details_timeout_ms: Some(None),
            swipe_threshold_px: Some(None),
            layout: Some(None),
            default_view: Some(None),
        }
    }

    /// Whether the update changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.auto_slide_delay_ms.is_none()
            && self.auto_slide_enabled.is_none()
            && self.transition_duration_ms.is_none()
            && self.details_timeout_ms.is_none()
            && self.swipe_threshold_px.is_none()
            && self.layout.is_none()
            && self.default_view.is_none()
    }
}

/// Resolved carousel configuration used at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub auto_slide_delay: Duration,
    pub auto_slide_enabled: bool,
    pub transition_duration: Duration,
    pub details_timeout: Duration,
    pub swipe_threshold_px: u32,
    pub layout: Layout,
    pub default_view: ViewMode,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        ShowcaseSettings::with_defaults().carousel_config()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Auto-slide delay must be between 1000 and 60000 ms, got {0}")]
    InvalidAutoSlideDelay(u64),

    #[error("Transition duration must be at most 5000 ms, got {0}")]
    InvalidTransitionDuration(u64),

    #[error("Details timeout must be between 1000 and 120000 ms, got {0}")]
    InvalidDetailsTimeout(u64),

    #[error("Swipe threshold must be between 1 and 500 px, got {0}")]
    InvalidSwipeThreshold(u32),

    #[error("Failed to read settings file: {0}")]
    Io(String),

    #[error("Failed to parse settings file: {0}")]
    Parse(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &ShowcaseSettings) -> Result<(), SettingsError> {
    if let Some(delay) = settings.auto_slide_delay_ms {
        if !(1000..=60_000).contains(&delay) {
            return Err(SettingsError::InvalidAutoSlideDelay(delay));
        }
    }

    if let Some(duration) = settings.transition_duration_ms {
        if duration > 5000 {
            return Err(SettingsError::InvalidTransitionDuration(duration));
        }
    }

    if let Some(timeout) = settings.details_timeout_ms {
        if !(1000..=120_000).contains(&timeout) {
            return Err(SettingsError::InvalidDetailsTimeout(timeout));
        }
    }

    if let Some(threshold) = settings.swipe_threshold_px {
        if !(1..=500).contains(&threshold) {
            return Err(SettingsError::InvalidSwipeThreshold(threshold));
        }
    }

    Ok(())
}

/// Load and validate a JSON settings file.
///
/// A missing file yields the defaults; fields absent from the file fall back
/// to their defaults as well.
pub fn load_settings_file(path: &Path) -> Result<ShowcaseSettings, SettingsError> {
    if !path.exists() {
        return Ok(ShowcaseSettings::with_defaults());
    }

    let raw = fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
    let parsed: ShowcaseSettings =
        serde_json::from_str(&raw).map_err(|e| SettingsError::Parse(e.to_string()))?;

    let mut settings = ShowcaseSettings::with_defaults();
    settings.merge(&ShowcaseSettingsUpdate {
        auto_slide_delay_ms: parsed.auto_slide_delay_ms.map(Some),
        auto_slide_enabled: parsed.auto_slide_enabled.map(Some),
        transition_duration_ms: parsed.transition_duration_ms.map(Some),
        details_timeout_ms: parsed.details_timeout_ms.map(Some),
        swipe_threshold_px: parsed.swipe_threshold_px.map(Some),
        layout: parsed.layout.map(Some),
        default_view: parsed.default_view.map(Some),
    });

    validate_settings(&settings)?;
    Ok(settings)
}

/// Validate and write settings as pretty JSON, creating the parent
/// directory. Fields left at `None` are written as `null` and load back as
/// their defaults.
pub fn save_settings_file(path: &Path, settings: &ShowcaseSettings) -> Result<(), SettingsError> {
    validate_settings(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
    }
    let json =
        serde_json::to_string_pretty(settings).map_err(|e| SettingsError::Parse(e.to_string()))?;
    fs::write(path, json).map_err(|e| SettingsError::Io(e.to_string()))
}
