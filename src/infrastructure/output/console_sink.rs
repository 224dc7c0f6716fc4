//! Console and in-memory output sinks

use std::io::Write;
use std::sync::Mutex;

use crate::generation::{GenerationError, OutputSink};

/// Writes snippets to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn publish(&self, text: &str) -> Result<(), GenerationError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")
            .and_then(|_| stdout.flush())
            .map_err(|e| GenerationError::OutputError(format!("Failed to write to stdout: {e}")))
    }
}

/// Keeps every published snippet; used by tests and embedding hosts
#[derive(Debug, Default)]
pub struct MemorySink {
    published: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snippets published so far, oldest first
    pub fn published(&self) -> Vec<String> {
        match self.published.lock() {
            Ok(published) => published.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OutputSink for MemorySink {
    fn publish(&self, text: &str) -> Result<(), GenerationError> {
        self.published
            .lock()
            .map_err(|_| GenerationError::OutputError("Memory sink lock poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}
