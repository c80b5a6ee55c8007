//! Path utilities for showcase data directories.
//!
//! This module provides the canonical path resolution for:
//! - Application data root
//! - Database location
//! - Settings file location
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - Environment and OS lookups are kept in `platform`; the resolution rules
//!   themselves are pure functions

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, SETTINGS_FILE_NAME, database_path, settings_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, normalize_user_path, resolve_data_root};
