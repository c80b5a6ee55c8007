//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repositories are CRUD-focused; validation lives in services
//! - The content service is read-only from the carousel's point of view

pub mod category_repository;
pub mod content;
pub mod event_emitter;
pub mod project_repository;

use std::sync::Arc;
use thiserror::Error;

pub use category_repository::CategoryRepository;
pub use content::{ContentError, ContentServicePort};
pub use event_emitter::{CarouselEventEmitter, ChannelEmitter, NoopEmitter};
pub use project_repository::ProjectRepository;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without coupling them to concrete
/// implementations.
#[derive(Clone)]
pub struct Repos {
    /// Project repository for admin CRUD.
    pub projects: Arc<dyn ProjectRepository>,
    /// Category repository for admin CRUD.
    pub categories: Arc<dyn CategoryRepository>,
    /// Read side used by the carousel.
    pub content: Arc<dyn ContentServicePort>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        categories: Arc<dyn CategoryRepository>,
        content: Arc<dyn ContentServicePort>,
    ) -> Self {
        Self {
            projects,
            categories,
            content,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, HTTP
/// status codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Content service failed.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Project submission rejected.
    #[error(transparent)]
    InvalidProject(#[from] crate::domain::ProjectValidationError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
