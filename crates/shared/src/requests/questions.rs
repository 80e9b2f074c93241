use serde::{Deserialize, Serialize};

use super::IntegerField;

/// Body of `POST /questions`.
///
/// The same endpoint serves two purposes. A non-empty `searchTerm` makes it
/// a search; otherwise the remaining fields describe a new question. Every
/// field is optional here so the engine can report missing ones itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm", default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<IntegerField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<IntegerField>,
}
