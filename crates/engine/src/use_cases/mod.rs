//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across repository ports to fulfill user stories.

pub mod catalog;
pub mod quiz;

pub use catalog::CatalogUseCases;
pub use quiz::QuizUseCases;
