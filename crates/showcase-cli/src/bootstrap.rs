//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Settings file (via showcase-core settings)
//! - Database pool and repositories (via showcase-db)
//! - Core services (via showcase-core)
//!
//! Command handlers receive the composed `CliContext` and delegate to it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use showcase_core::paths::{
    DATABASE_FILE_NAME, SETTINGS_FILE_NAME, data_root, normalize_user_path,
};
use showcase_core::services::{SettingsService, ShowcaseCore};
use showcase_core::settings::{ShowcaseSettings, load_settings_file};
use showcase_db::{CoreFactory, setup_database};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data directory override (`--data-dir` / `SHOWCASE_DATA_DIR`).
    pub data_dir: Option<String>,
    /// Settings file override (`--config`).
    pub settings_file: Option<PathBuf>,
}

impl CliConfig {
    /// Resolve the data directory, creating it if needed.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        let dir = match self.data_dir.as_deref() {
            Some(raw) => normalize_user_path(raw)?,
            None => data_root()?,
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(dir)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub core: ShowcaseCore,
    /// Validated carousel settings.
    pub settings: ShowcaseSettings,
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    pub settings_path: PathBuf,
}

impl CliContext {
    /// Access the core facade.
    pub const fn core(&self) -> &ShowcaseCore {
        &self.core
    }

    pub const fn settings(&self) -> &ShowcaseSettings {
        &self.settings
    }

    /// Read/write access to the settings file in use.
    pub fn settings_service(&self) -> SettingsService {
        SettingsService::new(self.settings_path.clone())
    }
}

/// Load and validate settings from `path`; a missing file means defaults.
pub fn load_settings(path: &std::path::Path) -> Result<ShowcaseSettings, CliError> {
    Ok(load_settings_file(path)?)
}

/// Bootstrap the CLI application.
///
/// 1. Resolves the data directory
/// 2. Loads and validates settings
/// 3. Opens the database and builds `ShowcaseCore`
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let data_dir = config.resolve_data_dir()?;
    let settings_path = config
        .settings_file
        .clone()
        .unwrap_or_else(|| data_dir.join(SETTINGS_FILE_NAME));
    let settings = load_settings(&settings_path)?;

    let database_path = data_dir.join(DATABASE_FILE_NAME);
    let pool = setup_database(&database_path)
        .await
        .map_err(|e| CliError::Database(format!("{e:#}")))?;
    debug!(
        data_dir = %data_dir.display(),
        settings = %settings_path.display(),
        "CLI context ready"
    );

    Ok(CliContext {
        core: CoreFactory::build_core(pool),
        settings,
        data_dir,
        database_path,
        settings_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: Some(dir.path().join("data").display().to_string()),
            settings_file: None,
        };

        let ctx = bootstrap(config).await.unwrap();
        assert!(ctx.database_path.exists());
        assert_eq!(ctx.settings, ShowcaseSettings::with_defaults());
        assert!(ctx.core().projects().list().await.unwrap().is_empty());
    }

    #[test]
    fn test_invalid_settings_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "auto_slide_delay_ms": 5 }"#).unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }
}
