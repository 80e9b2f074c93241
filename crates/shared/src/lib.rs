//! Trivia Protocol - Wire-format types for the HTTP API
//!
//! This crate contains the JSON bodies exchanged with clients:
//! - Request bodies for question submission/search and quiz draws
//! - Success responses for every endpoint
//! - The uniform error body
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and lenient parsing helpers
//! 3. **No domain IDs** - use raw `i64` ids in DTOs

pub mod requests;
pub mod responses;

pub use requests::{IntegerField, PageQuery, QuestionsPostBody, QuizCategoryData, QuizRequest};
pub use responses::{
    CategoriesResponse, CategoryMap, CategoryQuestionsResponse, ErrorResponse, QuestionData,
    QuestionCreatedResponse, QuestionDeletedResponse, QuestionListResponse, QuizResponse,
    SearchResultsResponse,
};
