//! List questions by category use case.

use std::sync::Arc;

use trivia_domain::{paginate, CategoryId, Question, QUESTIONS_PER_PAGE};

use crate::infrastructure::ports::{CategoryRepo, QuestionRepo};

use super::CatalogError;

/// One page of a single category's questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    /// Number of questions on this page, not in the whole category.
    pub total_questions: usize,
    pub current_category: CategoryId,
}

/// Paginated questions of one category.
pub struct ListQuestionsByCategory {
    question_repo: Arc<dyn QuestionRepo>,
    category_repo: Arc<dyn CategoryRepo>,
}

impl ListQuestionsByCategory {
    pub fn new(question_repo: Arc<dyn QuestionRepo>, category_repo: Arc<dyn CategoryRepo>) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    /// Execute the list by category use case.
    ///
    /// # Returns
    /// * `Ok(CategoryQuestions)` - A non-empty page of the category
    /// * `Err(CatalogError::CategoryNotFound)` - No category with this id
    /// * `Err(CatalogError::PageNotFound)` - The category has no questions on this page
    pub async fn execute(
        &self,
        category_id: CategoryId,
        page: i64,
    ) -> Result<CategoryQuestions, CatalogError> {
        if !self.category_repo.exists(category_id).await? {
            return Err(CatalogError::CategoryNotFound(category_id));
        }

        let questions = self.question_repo.list_by_category(category_id).await?;
        let current = paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec();
        if current.is_empty() {
            tracing::debug!(
                category_id = %category_id,
                page,
                "Requested category page is empty"
            );
            return Err(CatalogError::PageNotFound { page });
        }

        Ok(CategoryQuestions {
            total_questions: current.len(),
            questions: current,
            current_category: category_id,
        })
    }
}
