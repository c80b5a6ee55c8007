//! `SQLite` implementation of the category repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use showcase_core::domain::{Category, NewCategory};
use showcase_core::ports::{CategoryRepository, RepositoryError};

use super::row_mappers::{CategoryRow, format_timestamp, map_sqlx_error, row_to_category};

/// `SQLite` implementation of the category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new `SQLite` category repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn slug_conflict(e: sqlx::Error, slug: &str) -> RepositoryError {
    match map_sqlx_error(e) {
        RepositoryError::AlreadyExists(_) => {
            RepositoryError::AlreadyExists(format!("Category slug '{slug}'"))
        }
        other => other,
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(row_to_category).collect())
    }

    async fn get(&self, id: i64) -> Result<Category, RepositoryError> {
        sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .map(row_to_category)
        .ok_or_else(|| RepositoryError::NotFound(format!("Category {id}")))
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO categories (name, slug, created_at) VALUES (?, ?, ?)")
                .bind(&category.name)
                .bind(&category.slug)
                .bind(format_timestamp(Utc::now()))
                .execute(&self.pool)
                .await
                .map_err(|e| slug_conflict(e, &category.slug))?;

        self.get(result.last_insert_rowid()).await
    }

    async fn update(&self, id: i64, category: &NewCategory) -> Result<Category, RepositoryError> {
        let result = sqlx::query("UPDATE categories SET name = ?, slug = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.slug)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| slug_conflict(e, &category.slug))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Category {id}")));
        }
        self.get(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let detached = sqlx::query("UPDATE projects SET category_id = NULL WHERE category_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(map_sqlx_error)?;
            return Err(RepositoryError::NotFound(format!("Category {id}")));
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        debug!(
            id,
            uncategorized = detached.rows_affected(),
            "Category deleted"
        );
        Ok(())
    }
}
