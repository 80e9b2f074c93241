//! Quiz question selection.
//!
//! A quiz session never repeats a question: the caller sends back every id
//! it has already been shown, and each draw picks among the rest. Nothing is
//! remembered between draws.
//!
//! # Draw procedure
//!
//! The pool starts as every question in the requested category (or all
//! questions for [`CategoryId::ALL`]), in id order. Each step picks a
//! uniformly random index into the *current* pool. An excluded pick is
//! removed from the pool and the step repeats; any other pick is the result.
//! Since every rejection shrinks the pool, a draw takes at most
//! `pool.len()` picks.
//!
//! The result is uniform over the remaining pool at each step, which is not
//! the same as one uniform pick over the eligible subset.

use std::collections::HashSet;

use crate::{CategoryId, Question, QuestionId};

/// Outcome of a single quiz draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    /// An unseen question from the requested category.
    Question(Question),
    /// Every question in the category has been shown already.
    Exhausted,
}

impl QuizDraw {
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Question(question) => Some(question),
            Self::Exhausted => None,
        }
    }
}

/// Candidate questions for one draw.
#[derive(Debug, Clone)]
pub struct QuizPool {
    questions: Vec<Question>,
}

impl QuizPool {
    /// Pool over the questions in `category`, or over all of them for
    /// [`CategoryId::ALL`].
    pub fn for_category(questions: Vec<Question>, category: CategoryId) -> Self {
        let questions = if category.is_all() {
            questions
        } else {
            questions
                .into_iter()
                .filter(|question| question.category == category)
                .collect()
        };
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draw one question not in `excluded`.
    ///
    /// `pick(len)` must return an index in `0..len`; larger values wrap.
    pub fn draw<F>(mut self, excluded: &HashSet<QuestionId>, mut pick: F) -> QuizDraw
    where
        F: FnMut(usize) -> usize,
    {
        while !self.questions.is_empty() {
            let index = pick(self.questions.len()) % self.questions.len();
            if excluded.contains(&self.questions[index].id) {
                self.questions.remove(index);
                continue;
            }
            return QuizDraw::Question(self.questions.swap_remove(index));
        }
        QuizDraw::Exhausted
    }
}
