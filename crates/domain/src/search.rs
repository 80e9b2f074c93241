//! Question text search.

use crate::Question;

/// Questions whose text contains `term`, ignoring case.
///
/// Input order is preserved. An empty term is a substring of every text, so
/// it matches everything. Only the question text is inspected.
pub fn search_questions(questions: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .iter()
        .filter(|question| question.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
