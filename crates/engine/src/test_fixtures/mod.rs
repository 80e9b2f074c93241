//! Common test helpers for building questions, categories and stores.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{question, standard_categories};
//!
//! #[test]
//! fn test_art_question() {
//!     let q = question(4, "La Giaconda is better known as what?", 2);
//!     // ... test logic
//! }
//! ```

use trivia_domain::{Category, CategoryId, Question, QuestionId};

use crate::infrastructure::sqlite::SqliteRepositories;

// =============================================================================
// Domain Builders
// =============================================================================

/// A question with a predictable answer and difficulty.
pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id: QuestionId::new(id),
        question: text.to_string(),
        answer: format!("Answer {id}"),
        difficulty: 1,
        category: CategoryId::new(category),
    }
}

/// `count` questions with ids `1..=count`, all in `category`.
pub fn numbered_questions(count: i64, category: i64) -> Vec<Question> {
    (1..=count)
        .map(|id| question(id, &format!("Question number {id}?"), category))
        .collect()
}

/// Science, Art and Geography with ids 1-3.
pub fn standard_categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::new(1), "Science"),
        Category::new(CategoryId::new(2), "Art"),
        Category::new(CategoryId::new(3), "Geography"),
    ]
}

// =============================================================================
// SQLite Stores
// =============================================================================

/// Open an empty SQLite store inside `dir`.
pub async fn sqlite_store(dir: &tempfile::TempDir) -> SqliteRepositories {
    let db_path = dir.path().join("trivia.db");
    SqliteRepositories::connect(&db_path.to_string_lossy())
        .await
        .expect("open sqlite store")
}

/// Insert categories with fixed ids.
pub async fn insert_categories(store: &SqliteRepositories, categories: &[Category]) {
    for category in categories {
        sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
            .bind(category.id.value())
            .bind(&category.kind)
            .execute(&store.pool)
            .await
            .expect("insert category");
    }
}

/// Insert questions keeping their ids.
pub async fn insert_questions(store: &SqliteRepositories, questions: &[Question]) {
    for question in questions {
        sqlx::query(
            "INSERT INTO questions (id, question, answer, difficulty, category) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(question.id.value())
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category.value())
        .execute(&store.pool)
        .await
        .expect("insert question");
    }
}
