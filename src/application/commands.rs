//! Data Transfer Objects for application layer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::ApplicationError;
use crate::generation::{HttpMethod, RestDoc};

/// Request to generate snippets from a snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDocsRequest {
    pub snapshot_path: String,
    /// Only this handler; every applicable handler when `None`
    pub handler: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl GenerateDocsRequest {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.snapshot_path.trim().is_empty() {
            return Err(ApplicationError::ValidationError(
                "Snapshot path cannot be empty".to_string(),
            ));
        }
        if self.handler.as_deref().is_some_and(|h| h.trim().is_empty()) {
            return Err(ApplicationError::ValidationError(
                "Handler name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One generated snippet, without its text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDoc {
    pub handler: String,
    pub method: HttpMethod,
    pub path: String,
    pub diagnostics: usize,
}

impl From<&RestDoc> for GeneratedDoc {
    fn from(doc: &RestDoc) -> Self {
        Self {
            handler: doc.descriptor.method_name.clone(),
            method: doc.descriptor.http_method,
            path: doc.descriptor.path.clone(),
            diagnostics: doc.diagnostics.len(),
        }
    }
}

/// Response from snippet generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateDocsResponse {
    pub generated: Vec<GeneratedDoc>,
    /// Handlers without a supported mapping
    pub skipped: usize,
}

/// An applicable handler as listed by `handlers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerSummary {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
}
