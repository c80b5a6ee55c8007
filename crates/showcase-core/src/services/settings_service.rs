//! Settings service - file-backed showcase settings.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::ports::CoreError;
use crate::settings::{
    ShowcaseSettings, ShowcaseSettingsUpdate, load_settings_file, save_settings_file,
};

/// Service for reading and changing the settings file.
#[derive(Debug, Clone)]
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current settings; a missing file yields the defaults.
    pub fn get(&self) -> Result<ShowcaseSettings, CoreError> {
        Ok(load_settings_file(&self.path)?)
    }

    /// Apply a partial update, validate the result and persist it.
    ///
    /// Nothing is written when validation fails.
    pub fn update(&self, update: &ShowcaseSettingsUpdate) -> Result<ShowcaseSettings, CoreError> {
        let mut current = self.get()?;
        current.merge(update);
        save_settings_file(&self.path, &current)?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(current)
    }

    /// Reset every field to its default.
    pub fn reset(&self) -> Result<ShowcaseSettings, CoreError> {
        self.update(&ShowcaseSettingsUpdate::reset_all())
    }
}
