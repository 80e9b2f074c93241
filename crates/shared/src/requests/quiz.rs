use serde::{Deserialize, Serialize};

use super::IntegerField;

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown in this quiz session.
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    /// Category to draw from; absent means all categories.
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryData>,
}

impl QuizRequest {
    /// Requested category id, `0` for "all".
    pub fn category_id(&self) -> i64 {
        self.quiz_category
            .as_ref()
            .and_then(|category| category.id.as_ref())
            .and_then(IntegerField::as_i64)
            .unwrap_or(0)
    }
}

/// Category selector as sent by the quiz client (`{"type": "Art", "id": 2}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategoryData {
    /// Absent or non-numeric ids mean all categories.
    #[serde(default)]
    pub id: Option<IntegerField>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
