//! Database and settings file locations.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

pub const DATABASE_FILE_NAME: &str = "showcase.db";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Get the path to the showcase database file.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE_NAME))
}

/// Get the path to the carousel settings file.
pub fn settings_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(SETTINGS_FILE_NAME))
}
