//! Trivia domain: entities and the pure query logic behind the service.
//!
//! - [`pagination`] - fixed-size, 1-based pages
//! - [`search`] - case-insensitive question text search
//! - [`quiz`] - random draw of an unseen quiz question

pub mod entities;
pub mod error;
pub mod ids;
pub mod pagination;
pub mod quiz;
pub mod search;

pub use entities::{categories_by_id, Category, NewQuestion, Question};
pub use error::DomainError;
pub use ids::{CategoryId, QuestionId};
pub use pagination::{page_count, paginate, QUESTIONS_PER_PAGE};
pub use quiz::{QuizDraw, QuizPool};
pub use search::search_questions;
