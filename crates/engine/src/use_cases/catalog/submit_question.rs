//! Search-or-create use case behind `POST /questions`.
//!
//! The endpoint is shared by two operations. A non-empty search term turns
//! the request into a search; anything else is a new-question submission.

use std::collections::BTreeMap;
use std::sync::Arc;

use trivia_domain::{
    categories_by_id, search_questions, CategoryId, DomainError, NewQuestion, Question, QuestionId,
};

use crate::infrastructure::ports::{CategoryRepo, QuestionRepo};

use super::{load_question_page, CatalogError, QuestionPage};

/// Raw submission fields as received; every one may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFields {
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// What a `POST /questions` body asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSubmission {
    Search { term: String },
    Create(NewQuestion),
}

impl QuestionSubmission {
    /// Resolve raw fields into a search or a validated new question.
    pub fn from_fields(fields: SubmissionFields) -> Result<Self, DomainError> {
        if let Some(term) = fields.search_term.filter(|term| !term.is_empty()) {
            return Ok(Self::Search { term });
        }

        let question = fields
            .question
            .ok_or_else(|| DomainError::missing("question"))?;
        let answer = fields
            .answer
            .ok_or_else(|| DomainError::missing("answer"))?;
        let difficulty = fields
            .difficulty
            .ok_or_else(|| DomainError::missing("difficulty"))?;
        let category = fields
            .category
            .ok_or_else(|| DomainError::missing("category"))?;

        NewQuestion::new(question, answer, difficulty, CategoryId::new(category)).map(Self::Create)
    }
}

/// Every question matching a search term. Not paginated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
}

/// A stored question plus the refreshed question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub id: QuestionId,
    pub listing: QuestionPage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    SearchResults(SearchResults),
    Created(CreatedQuestion),
}

/// Search or create a question.
pub struct SubmitQuestion {
    question_repo: Arc<dyn QuestionRepo>,
    category_repo: Arc<dyn CategoryRepo>,
}

impl SubmitQuestion {
    pub fn new(question_repo: Arc<dyn QuestionRepo>, category_repo: Arc<dyn CategoryRepo>) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    /// Execute the submission.
    ///
    /// # Arguments
    /// * `fields` - Raw body fields
    /// * `page` - Page of the refreshed list returned after a create
    ///
    /// # Returns
    /// * `Ok(SubmitOutcome::SearchResults)` - All matches for a search
    /// * `Ok(SubmitOutcome::Created)` - The new id and refreshed list
    /// * `Err(CatalogError::InvalidSubmission)` - A create field is missing or empty
    /// * `Err(CatalogError::WriteFailed)` - The store rejected the insert
    pub async fn execute(
        &self,
        fields: SubmissionFields,
        page: i64,
    ) -> Result<SubmitOutcome, CatalogError> {
        match QuestionSubmission::from_fields(fields)? {
            QuestionSubmission::Search { term } => {
                self.search(&term).await.map(SubmitOutcome::SearchResults)
            }
            QuestionSubmission::Create(new_question) => {
                self.create(new_question, page).await.map(SubmitOutcome::Created)
            }
        }
    }

    async fn search(&self, term: &str) -> Result<SearchResults, CatalogError> {
        let questions = self.question_repo.list().await?;
        let matches = search_questions(&questions, term);
        let categories = self.category_repo.list().await?;

        tracing::debug!(term, matches = matches.len(), "Searched questions");

        Ok(SearchResults {
            total_questions: matches.len(),
            questions: matches,
            categories: categories_by_id(&categories),
        })
    }

    async fn create(
        &self,
        new_question: NewQuestion,
        page: i64,
    ) -> Result<CreatedQuestion, CatalogError> {
        let id = self
            .question_repo
            .insert(&new_question)
            .await
            .map_err(|source| {
                tracing::warn!(error = %source, "Failed to insert question");
                CatalogError::WriteFailed {
                    operation: "insert",
                    source,
                }
            })?;

        tracing::info!(
            question_id = %id,
            category_id = %new_question.category(),
            "Created question"
        );

        let listing =
            load_question_page(self.question_repo.as_ref(), self.category_repo.as_ref(), page)
                .await?;

        Ok(CreatedQuestion { id, listing })
    }
}
