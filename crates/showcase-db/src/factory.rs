//! Composition utilities for building `ShowcaseCore` with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use showcase_core::Repos;
use showcase_core::services::ShowcaseCore;

use crate::repositories::{
    SqliteCategoryRepository, SqliteContentService, SqliteProjectRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteProjectRepository::new(pool.clone())),
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteContentService::new(pool)),
        )
    }

    /// Build a complete `ShowcaseCore` from a pool.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_core(pool);
    /// ```
    pub fn build_core(pool: SqlitePool) -> ShowcaseCore {
        ShowcaseCore::new(Self::build_repos(pool))
    }

    /// Create a content service from a pool.
    pub fn content_service(pool: SqlitePool) -> Arc<SqliteContentService> {
        Arc::new(SqliteContentService::new(pool))
    }
}
