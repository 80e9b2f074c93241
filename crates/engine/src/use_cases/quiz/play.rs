//! Play quiz use case.
//!
//! Draws the next question for a quiz session.

use std::collections::HashSet;
use std::sync::Arc;

use trivia_domain::{CategoryId, QuestionId, QuizDraw, QuizPool};

use crate::infrastructure::ports::{QuestionRepo, RandomPort, RepoError};

/// Errors that can occur while drawing a quiz question.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Play quiz use case.
///
/// Orchestrates: pool loading for the category, random draw excluding the
/// questions already shown.
pub struct PlayQuiz {
    question_repo: Arc<dyn QuestionRepo>,
    random: Arc<dyn RandomPort>,
}

impl PlayQuiz {
    pub fn new(question_repo: Arc<dyn QuestionRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            question_repo,
            random,
        }
    }

    /// Execute the play quiz use case.
    ///
    /// # Arguments
    /// * `category_id` - Category to draw from, [`CategoryId::ALL`] for every category
    /// * `previous` - Question ids already shown in this session
    ///
    /// # Returns
    /// * `Ok(QuizDraw::Question)` - An unseen question
    /// * `Ok(QuizDraw::Exhausted)` - Nothing left to show
    pub async fn execute(
        &self,
        category_id: CategoryId,
        previous: &HashSet<QuestionId>,
    ) -> Result<QuizDraw, QuizError> {
        let questions = if category_id.is_all() {
            self.question_repo.list().await?
        } else {
            self.question_repo.list_by_category(category_id).await?
        };

        let pool = QuizPool::for_category(questions, category_id);
        let pool_size = pool.len();
        let draw = pool.draw(previous, |len| self.random.gen_index(len));

        match &draw {
            QuizDraw::Question(question) => tracing::debug!(
                category_id = %category_id,
                question_id = %question.id,
                pool_size,
                previous = previous.len(),
                "Drew quiz question"
            ),
            QuizDraw::Exhausted => tracing::debug!(
                category_id = %category_id,
                pool_size,
                previous = previous.len(),
                "Quiz category exhausted"
            ),
        }

        Ok(draw)
    }
}
