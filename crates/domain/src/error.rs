//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a required field is empty)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A required field was not supplied at all
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a supplied value breaks an invariant:
    /// - Text fields that are present but empty
    /// - Numeric fields outside their allowed range
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a missing field error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}
