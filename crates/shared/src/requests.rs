//! Request bodies and query strings accepted by the HTTP API

use serde::{Deserialize, Serialize};

mod questions;
mod quiz;

pub use questions::QuestionsPostBody;
pub use quiz::{QuizCategoryData, QuizRequest};

// =============================================================================
// Lenient Scalars
// =============================================================================

/// An integer that clients may send either as a JSON number or as a string.
///
/// Web forms commonly submit select values as strings (`"3"`), while other
/// clients send numbers (`3`). Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntegerField {
    Number(i64),
    Text(String),
}

impl IntegerField {
    /// The integer value, or `None` if the text form does not parse.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

// =============================================================================
// Pagination Query
// =============================================================================

/// `?page=N` query string.
///
/// Missing or non-integer values fall back to the first page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// Build from decoded query pairs. The first `page` wins when repeated.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        Self { page }
    }

    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(1)
    }
}
