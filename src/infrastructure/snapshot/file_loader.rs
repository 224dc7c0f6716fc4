//! File-based snapshot loader
//!
//! This loader handles only file I/O and format detection. Indexing is done by
//! [`ProgramSnapshot`].

use async_trait::async_trait;
use tokio::fs;

use crate::generation::{GenerationError, SnapshotLoader};
use crate::model::ProgramSnapshot;

/// Loads program snapshots from local JSON or YAML files
pub struct FileSnapshotLoader;

impl FileSnapshotLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SnapshotLoader for FileSnapshotLoader {
    async fn load(&self, source: &str) -> Result<ProgramSnapshot, GenerationError> {
        let content = fs::read_to_string(source)
            .await
            .map_err(GenerationError::IoError)?;

        tracing::debug!(source, bytes = content.len(), "Read snapshot file");

        if source.ends_with(".json") {
            Ok(ProgramSnapshot::from_json_str(&content)?)
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            parse_yaml(&content)
        } else {
            // Try JSON first, then YAML
            ProgramSnapshot::from_json_str(&content)
                .or_else(|_| ProgramSnapshot::from_yaml_str(&content))
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse snapshot: {e}")))
        }
    }
}

fn parse_yaml(content: &str) -> Result<ProgramSnapshot, GenerationError> {
    ProgramSnapshot::from_yaml_str(content)
        .map_err(|e| GenerationError::LoadError(format!("Failed to parse YAML: {e}")))
}

impl Default for FileSnapshotLoader {
    fn default() -> Self {
        Self::new()
    }
}
