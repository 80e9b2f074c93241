//! SQLite category repository implementation.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use trivia_domain::{Category, CategoryId};

use super::map_sqlx_error;
use crate::infrastructure::ports::{CategoryRepo, RepoError};

/// Repository for Category reads.
pub struct SqliteCategoryRepo {
    pool: SqlitePool,
}

impl SqliteCategoryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &SqliteRow) -> Result<Category, RepoError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepoError::database("row_to_category", e))?;
        let kind: String = row
            .try_get("type")
            .map_err(|e| RepoError::database("row_to_category", e))?;
        Ok(Category::new(CategoryId::new(id), kind))
    }
}

#[async_trait]
impl CategoryRepo for SqliteCategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_categories", e))?;

        rows.iter().map(Self::row_to_category).collect()
    }

    async fn exists(&self, id: CategoryId) -> Result<bool, RepoError> {
        let row = sqlx::query("SELECT 1 FROM categories WHERE id = ?")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("category_exists", e))?;

        Ok(row.is_some())
    }
}
