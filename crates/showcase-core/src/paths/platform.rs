//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "SHOWCASE_DATA_DIR";

const APP_DIR_NAME: &str = "showcase";

/// Normalize a user-provided path, expanding `~`.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if trimmed == "~" {
        return dirs::home_dir().ok_or(PathError::NoHomeDir);
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(trimmed))
}

/// Pick the data root from an explicit override or the system data dir.
///
/// Resolution order:
/// 1. `env_override` (the `SHOWCASE_DATA_DIR` value, if set and non-empty)
/// 2. `<system_data_dir>/showcase`
pub fn resolve_data_root(
    env_override: Option<&str>,
    system_data_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(raw) = env_override.filter(|raw| !raw.trim().is_empty()) {
        return normalize_user_path(raw);
    }

    system_data_dir
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::NoDataDir)
}

/// Get the root directory for application data (database, settings).
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let env_override = env::var(DATA_DIR_ENV).ok();
    let root = resolve_data_root(env_override.as_deref(), dirs::data_local_dir())?;

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let root = resolve_data_root(Some("/srv/showcase"), Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(root, PathBuf::from("/srv/showcase"));
    }

    #[test]
    fn test_blank_override_falls_back() {
        let root = resolve_data_root(Some("  "), Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(root, PathBuf::from("/data/showcase"));
    }

    #[test]
    fn test_no_data_dir() {
        assert!(matches!(
            resolve_data_root(None, None),
            Err(PathError::NoDataDir)
        ));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_user_path(""), Err(PathError::EmptyPath)));
        assert_eq!(
            normalize_user_path(" /tmp/x ").unwrap(),
            PathBuf::from("/tmp/x")
        );
    }
}
