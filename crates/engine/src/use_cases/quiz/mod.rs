//! Quiz use cases.
//!
//! Quiz sessions live entirely on the client: each draw receives the ids
//! already shown and the server keeps nothing between draws.

mod play;

use std::sync::Arc;

pub use play::{PlayQuiz, QuizError};

/// Container for quiz use cases.
pub struct QuizUseCases {
    pub play: Arc<PlayQuiz>,
}

impl QuizUseCases {
    pub fn new(play: Arc<PlayQuiz>) -> Self {
        Self { play }
    }
}
