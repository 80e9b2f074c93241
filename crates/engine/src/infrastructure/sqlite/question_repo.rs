//! SQLite question repository implementation.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use trivia_domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::map_sqlx_error;
use crate::infrastructure::ports::{QuestionRepo, RepoError};

const SELECT_QUESTION: &str = "SELECT id, question, answer, difficulty, category FROM questions";

/// Repository for Question operations.
pub struct SqliteQuestionRepo {
    pool: SqlitePool,
}

impl SqliteQuestionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_question(row: &SqliteRow) -> Result<Question, RepoError> {
        let map = |e: sqlx::Error| RepoError::database("row_to_question", e);

        Ok(Question {
            id: QuestionId::new(row.try_get("id").map_err(map)?),
            question: row.try_get("question").map_err(map)?,
            answer: row.try_get("answer").map_err(map)?,
            difficulty: row.try_get("difficulty").map_err(map)?,
            category: CategoryId::new(row.try_get("category").map_err(map)?),
        })
    }
}

#[async_trait]
impl QuestionRepo for SqliteQuestionRepo {
    async fn list(&self) -> Result<Vec<Question>, RepoError> {
        let rows = sqlx::query(&format!("{SELECT_QUESTION} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_questions", e))?;

        rows.iter().map(Self::row_to_question).collect()
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Question>, RepoError> {
        let rows = sqlx::query(&format!("{SELECT_QUESTION} WHERE category = ? ORDER BY id"))
            .bind(category_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_questions_by_category", e))?;

        rows.iter().map(Self::row_to_question).collect()
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>, RepoError> {
        let row = sqlx::query(&format!("{SELECT_QUESTION} WHERE id = ?"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_question", e))?;

        row.as_ref().map(Self::row_to_question).transpose()
    }

    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.difficulty())
        .bind(question.category().value())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert_question", e))?;

        Ok(QuestionId::new(result.last_insert_rowid()))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_question", e))?;

        Ok(result.rows_affected() > 0)
    }
}
