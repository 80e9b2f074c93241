//! SQLite-backed question and category storage.

mod category_repo;
mod question_repo;
mod schema;
mod seed;

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

pub use category_repo::SqliteCategoryRepo;
pub use question_repo::SqliteQuestionRepo;
pub use schema::ensure_schema;
pub use seed::seed_demo_data;

/// All SQLite repositories sharing one connection pool.
pub struct SqliteRepositories {
    pub pool: SqlitePool,
    pub question: Arc<SqliteQuestionRepo>,
    pub category: Arc<SqliteCategoryRepo>,
}

impl SqliteRepositories {
    /// Open (creating if missing) the database at `db_path` and ensure the schema.
    pub async fn connect(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        ensure_schema(&pool).await?;

        Ok(Self::new(pool))
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self {
            question: Arc::new(SqliteQuestionRepo::new(pool.clone())),
            category: Arc::new(SqliteCategoryRepo::new(pool.clone())),
            pool,
        }
    }
}

/// Classify a sqlx failure.
///
/// Pool exhaustion maps to `Unavailable`, constraint failures to
/// `ConstraintViolation`, everything else to `Database`.
pub(crate) fn map_sqlx_error(operation: &'static str, error: sqlx::Error) -> RepoError {
    if matches!(error, sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) {
        return RepoError::unavailable(operation);
    }
    if let sqlx::Error::Database(db) = &error {
        if db.is_foreign_key_violation() || db.is_unique_violation() || db.is_check_violation() {
            return RepoError::constraint(db.message());
        }
    }
    RepoError::database(operation, error)
}
