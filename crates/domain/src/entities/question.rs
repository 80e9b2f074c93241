//! Question entity - A trivia question with its answer
//!
//! Questions are created through [`NewQuestion`], receive their id from the
//! store, and are never edited afterwards.

use serde::{Deserialize, Serialize};

use crate::{CategoryId, DomainError, QuestionId};

/// A persisted trivia question
///
/// `category` is expected to reference an existing [`crate::Category`], but
/// that is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: CategoryId,
}

/// A validated question submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i64,
    category: CategoryId,
}

impl NewQuestion {
    /// Validates a submission.
    ///
    /// Text fields must be non-empty; difficulty and category must be
    /// positive (zero counts as "not supplied").
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i64,
        category: CategoryId,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        let answer = answer.into();

        if question.is_empty() {
            return Err(DomainError::validation("question cannot be empty"));
        }
        if answer.is_empty() {
            return Err(DomainError::validation("answer cannot be empty"));
        }
        if difficulty < 1 {
            return Err(DomainError::validation("difficulty must be positive"));
        }
        if category.value() < 1 {
            return Err(DomainError::validation("category must be positive"));
        }

        Ok(Self {
            question,
            answer,
            difficulty,
            category,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Attach the id the store assigned.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}
