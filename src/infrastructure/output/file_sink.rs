//! Filesystem-based output sink implementation

use std::fs;
use std::path::{Path, PathBuf};

use crate::generation::{GenerationError, OutputSink};

/// Output sink that writes snippets to a file, replacing its content
pub struct FileOutputSink {
    path: PathBuf,
}

impl FileOutputSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileOutputSink {
    fn publish(&self, text: &str) -> Result<(), GenerationError> {
        // Create parent directory if needed
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                GenerationError::OutputError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&self.path, text).map_err(|e| {
            GenerationError::OutputError(format!(
                "Failed to write file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::info!(path = %self.path.display(), "Wrote snippet");
        Ok(())
    }
}
