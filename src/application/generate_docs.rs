//! Use case for generating REST Docs snippets from a program snapshot

use std::sync::Arc;

use crate::application::{
    ApplicationError, GenerateDocsRequest, GenerateDocsResponse, GeneratedDoc,
};
use crate::core::GeneratorConfig;
use crate::generation::{OutputSink, RestDocGenerator, SnapshotLoader};

/// Separates snippets when several handlers are published together
const SNIPPET_SEPARATOR: &str = "\n\n";

/// Use case for generating snippets
pub struct GenerateDocsUseCase {
    snapshot_loader: Arc<dyn SnapshotLoader>,
    output_sink: Arc<dyn OutputSink>,
}

impl GenerateDocsUseCase {
    pub fn new(snapshot_loader: Arc<dyn SnapshotLoader>, output_sink: Arc<dyn OutputSink>) -> Self {
        Self {
            snapshot_loader,
            output_sink,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateDocsRequest,
    ) -> Result<GenerateDocsResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Load configuration and snapshot
        let config = match &request.config_path {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        let snapshot = self.snapshot_loader.load(&request.snapshot_path).await?;

        // 3. Select handlers
        let handlers = match &request.handler {
            Some(name) => vec![
                snapshot
                    .handler(name)
                    .ok_or_else(|| ApplicationError::HandlerNotFound(name.clone()))?,
            ],
            None => snapshot.handlers().iter().collect(),
        };

        // 4. Generate
        let generator = RestDocGenerator::new(&snapshot, &config)?;
        let mut texts = Vec::new();
        let mut generated = Vec::new();
        let mut skipped = 0;
        for handler in handlers {
            match generator.generate(handler)? {
                Some(doc) => {
                    generated.push(GeneratedDoc::from(&doc));
                    texts.push(doc.text);
                }
                None if request.handler.is_some() => {
                    return Err(ApplicationError::NotApplicable(handler.name.clone()));
                }
                None => skipped += 1,
            }
        }

        // 5. Publish
        if texts.is_empty() {
            tracing::warn!(
                snapshot = %request.snapshot_path,
                "No handler with a supported request mapping found"
            );
        } else {
            self.output_sink.publish(&texts.join(SNIPPET_SEPARATOR))?;
        }

        tracing::info!(
            generated = generated.len(),
            skipped,
            "Snippet generation finished"
        );
        Ok(GenerateDocsResponse { generated, skipped })
    }
}
