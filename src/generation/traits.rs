//! Port interfaces for the generation domain

use async_trait::async_trait;

use crate::generation::GenerationError;
use crate::model::ProgramSnapshot;

/// Receives generated snippet text
pub trait OutputSink {
    fn publish(&self, text: &str) -> Result<(), GenerationError>;
}

/// Loads a program snapshot (classes and handlers) from a source
#[async_trait]
pub trait SnapshotLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<ProgramSnapshot, GenerationError>;
}
