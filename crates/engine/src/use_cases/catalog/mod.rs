//! Catalog use cases.
//!
//! Listing, category filtering, search, creation and deletion of questions.
//! Every call re-reads the store; nothing is cached between requests.

mod delete_question;
mod error;
mod list_by_category;
mod list_categories;
mod list_questions;
mod submit_question;

use std::collections::BTreeMap;
use std::sync::Arc;

use trivia_domain::{categories_by_id, paginate, CategoryId, Question, QUESTIONS_PER_PAGE};

use crate::infrastructure::ports::{CategoryRepo, QuestionRepo, RepoError};

pub use delete_question::{DeleteQuestion, DeletedQuestion};
pub use error::CatalogError;
pub use list_by_category::{CategoryQuestions, ListQuestionsByCategory};
pub use list_categories::ListCategories;
pub use list_questions::ListQuestions;
pub use submit_question::{
    CreatedQuestion, QuestionSubmission, SearchResults, SubmissionFields, SubmitOutcome,
    SubmitQuestion,
};

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub list_categories: Arc<ListCategories>,
    pub list_questions: Arc<ListQuestions>,
    pub list_by_category: Arc<ListQuestionsByCategory>,
    pub submit_question: Arc<SubmitQuestion>,
    pub delete_question: Arc<DeleteQuestion>,
}

impl CatalogUseCases {
    pub fn new(question_repo: Arc<dyn QuestionRepo>, category_repo: Arc<dyn CategoryRepo>) -> Self {
        Self {
            list_categories: Arc::new(ListCategories::new(category_repo.clone())),
            list_questions: Arc::new(ListQuestions::new(
                question_repo.clone(),
                category_repo.clone(),
            )),
            list_by_category: Arc::new(ListQuestionsByCategory::new(
                question_repo.clone(),
                category_repo.clone(),
            )),
            submit_question: Arc::new(SubmitQuestion::new(
                question_repo.clone(),
                category_repo.clone(),
            )),
            delete_question: Arc::new(DeleteQuestion::new(question_repo, category_repo)),
        }
    }
}

/// One page of the full question list with the context clients render it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the whole question store, not of this page.
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
}

/// Read every question, cut out `page`, and attach the category mapping.
///
/// The page may be empty; callers decide whether that is an error.
async fn load_question_page(
    question_repo: &dyn QuestionRepo,
    category_repo: &dyn CategoryRepo,
    page: i64,
) -> Result<QuestionPage, RepoError> {
    let questions = question_repo.list().await?;
    let categories = category_repo.list().await?;

    Ok(QuestionPage {
        questions: paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions.len(),
        categories: categories_by_id(&categories),
    })
}
