//! Delete question use case.

use std::sync::Arc;

use trivia_domain::QuestionId;

use crate::infrastructure::ports::{CategoryRepo, QuestionRepo};

use super::{load_question_page, CatalogError, QuestionPage};

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedQuestion {
    pub id: QuestionId,
    /// The refreshed list; may be empty if the last question was removed.
    pub listing: QuestionPage,
}

/// Delete question use case.
///
/// Orchestrates: existence check, removal, re-listing.
pub struct DeleteQuestion {
    question_repo: Arc<dyn QuestionRepo>,
    category_repo: Arc<dyn CategoryRepo>,
}

impl DeleteQuestion {
    pub fn new(question_repo: Arc<dyn QuestionRepo>, category_repo: Arc<dyn CategoryRepo>) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    /// Execute the delete question use case.
    ///
    /// # Arguments
    /// * `id` - The question to remove
    /// * `page` - Page of the refreshed list to return
    ///
    /// # Returns
    /// * `Ok(DeletedQuestion)` - Question removed
    /// * `Err(CatalogError::QuestionNotFound)` - No question with this id
    /// * `Err(CatalogError::WriteFailed)` - The store failed to delete it
    pub async fn execute(&self, id: QuestionId, page: i64) -> Result<DeletedQuestion, CatalogError> {
        if self.question_repo.get(id).await?.is_none() {
            return Err(CatalogError::QuestionNotFound(id));
        }

        let removed = self.question_repo.delete(id).await.map_err(|source| {
            tracing::warn!(question_id = %id, error = %source, "Failed to delete question");
            CatalogError::WriteFailed {
                operation: "delete",
                source,
            }
        })?;
        // Another request may have removed it between the lookup and the delete.
        if !removed {
            return Err(CatalogError::QuestionNotFound(id));
        }

        tracing::info!(question_id = %id, "Deleted question");

        let listing =
            load_question_page(self.question_repo.as_ref(), self.category_repo.as_ref(), page)
                .await?;

        Ok(DeletedQuestion { id, listing })
    }
}
