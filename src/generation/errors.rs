//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur during document generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Snapshot loading error: {0}")]
    LoadError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedHttpMethod(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] crate::core::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<tera::Error> for GenerationError {
    fn from(error: tera::Error) -> Self {
        // tera keeps the interesting part in the source chain
        let mut message = error.to_string();
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        GenerationError::RenderError(message)
    }
}
