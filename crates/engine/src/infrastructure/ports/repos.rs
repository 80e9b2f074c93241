//! Repository port traits for database access.

use async_trait::async_trait;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

/// Question storage. List methods return questions ordered by id ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepo: Send + Sync {
    // Queries
    async fn list(&self) -> Result<Vec<Question>, RepoError>;
    async fn list_by_category(&self, category_id: CategoryId)
        -> Result<Vec<Question>, RepoError>;
    async fn get(&self, id: QuestionId) -> Result<Option<Question>, RepoError>;

    // Mutations
    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, RepoError>;
    /// Returns `false` if no question had this id.
    async fn delete(&self, id: QuestionId) -> Result<bool, RepoError>;
}

/// Category storage (read-only; categories are seed data).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, RepoError>;
    async fn exists(&self, id: CategoryId) -> Result<bool, RepoError>;
}
