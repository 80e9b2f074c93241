//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::{CategoryRepo, QuestionRepo, RandomPort},
    random::SystemRandom,
    sqlite::SqliteRepositories,
};
use crate::use_cases;
use crate::use_cases::quiz::PlayQuiz;

/// Main application state.
///
/// Holds all use cases, each wired to its repository ports.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: use_cases::CatalogUseCases,
    pub quiz: use_cases::QuizUseCases,
}

impl App {
    /// Create a new App backed by SQLite with system randomness.
    pub fn new(repos: SqliteRepositories) -> Self {
        let random_port: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());
        Self::with_ports(repos.question, repos.category, random_port)
    }

    /// Wire use cases over arbitrary port implementations.
    pub fn with_ports(
        question_repo: Arc<dyn QuestionRepo>,
        category_repo: Arc<dyn CategoryRepo>,
        random_port: Arc<dyn RandomPort>,
    ) -> Self {
        let catalog = use_cases::CatalogUseCases::new(question_repo.clone(), category_repo);
        let quiz =
            use_cases::QuizUseCases::new(Arc::new(PlayQuiz::new(question_repo, random_port)));

        Self {
            use_cases: UseCases { catalog, quiz },
        }
    }
}
