//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` and friends to exit codes and user-facing messages.

use showcase_core::settings::SettingsError;
use showcase_core::{ContentError, CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested project or category does not exist.
    #[error("{0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            RepositoryError::AlreadyExists(what) => Self::Arguments(format!("{what} already exists")),
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<ContentError> for CliError {
    fn from(err: ContentError) -> Self {
        let message = err.user_message();
        match err {
            ContentError::NotFound(_) => Self::NotFound(message.to_string()),
            ContentError::Storage(msg) => Self::Database(msg),
            other => Self::Core(other.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Content(content_err) => content_err.into(),
            CoreError::Settings(settings_err) => settings_err.into(),
            CoreError::InvalidProject(invalid) => Self::Arguments(invalid.to_string()),
            CoreError::Path(path_err) => Self::Config(path_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
