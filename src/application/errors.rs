//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Handler not found: {0}")]
    HandlerNotFound(String),

    #[error("Handler {0} has no supported request mapping")]
    NotApplicable(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::Error),
}
