//! SQLite schema initialization.

use sqlx::SqlitePool;

use super::map_sqlx_error;
use crate::infrastructure::ports::RepoError;

/// Create the tables if they do not exist yet.
///
/// Safe to call on every start-up.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| map_sqlx_error("ensure_schema", e))?;

    // Question ids are never reused after a delete.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty INTEGER NOT NULL,
            category INTEGER NOT NULL REFERENCES categories(id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| map_sqlx_error("ensure_schema", e))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS questions_category ON questions (category)")
        .execute(pool)
        .await
        .map_err(|e| map_sqlx_error("ensure_schema", e))?;

    tracing::info!("SQLite schema initialized (categories, questions)");
    Ok(())
}
