//! Catalog operation errors.

use trivia_domain::{CategoryId, DomainError, QuestionId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while listing, searching, creating or deleting questions.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),
    /// The requested page holds no questions (including an empty store).
    #[error("No questions on page {page}")]
    PageNotFound { page: i64 },
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),
    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] DomainError),
    /// A write was rejected or failed at the store.
    #[error("Failed to {operation} question: {source}")]
    WriteFailed {
        operation: &'static str,
        #[source]
        source: RepoError,
    },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
