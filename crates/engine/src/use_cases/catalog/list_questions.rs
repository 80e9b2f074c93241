//! List questions use case.

use std::sync::Arc;

use trivia_domain::{page_count, QUESTIONS_PER_PAGE};

use crate::infrastructure::ports::{CategoryRepo, QuestionRepo};

use super::{load_question_page, CatalogError, QuestionPage};

/// Paginated list of all questions, ordered by id.
pub struct ListQuestions {
    question_repo: Arc<dyn QuestionRepo>,
    category_repo: Arc<dyn CategoryRepo>,
}

impl ListQuestions {
    pub fn new(question_repo: Arc<dyn QuestionRepo>, category_repo: Arc<dyn CategoryRepo>) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    /// Execute the list questions use case.
    ///
    /// # Returns
    /// * `Ok(QuestionPage)` - A non-empty page
    /// * `Err(CatalogError::PageNotFound)` - The page is empty. An empty store
    ///   fails this way too, even for page 1.
    pub async fn execute(&self, page: i64) -> Result<QuestionPage, CatalogError> {
        let listing =
            load_question_page(self.question_repo.as_ref(), self.category_repo.as_ref(), page)
                .await?;

        if listing.questions.is_empty() {
            tracing::debug!(
                page,
                pages = page_count(listing.total_questions, QUESTIONS_PER_PAGE),
                "Requested page is empty"
            );
            return Err(CatalogError::PageNotFound { page });
        }

        Ok(listing)
    }
}
