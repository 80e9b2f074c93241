//! Response bodies returned by the HTTP API
//!
//! Every success body carries `success: true`; every failure body is an
//! [`ErrorResponse`] with `success: false`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category display names keyed by category id.
///
/// JSON object keys are strings, so ids appear as `"1"`, `"2"`, ...
pub type CategoryMap = BTreeMap<i64, String>;

// =============================================================================
// Shared Payloads
// =============================================================================

/// A question as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionData {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

// =============================================================================
// Success Responses
// =============================================================================

/// `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionData>,
    pub total_questions: usize,
    /// Always `"0"`: the unfiltered list spans every category.
    pub current_category: String,
    pub categories: CategoryMap,
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionData>,
    /// Length of `questions`, not of the whole category.
    pub total_questions: usize,
    pub current_category: i64,
}

/// `POST /questions` with a search term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsResponse {
    pub success: bool,
    pub questions: Vec<QuestionData>,
    pub total_questions: usize,
    pub current_category: i64,
    pub categories: CategoryMap,
}

/// `POST /questions` with a new question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<QuestionData>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted_id: i64,
    pub questions: Vec<QuestionData>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// `POST /quizzes`
///
/// `question` is `null` once the category has been exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionData>,
}

// =============================================================================
// Error Response
// =============================================================================

/// Uniform failure body: `{"success": false, "error": 404, "message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}
