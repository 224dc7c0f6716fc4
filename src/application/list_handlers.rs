//! Use case for listing documentable handlers

use std::sync::Arc;

use crate::application::{ApplicationError, HandlerSummary};
use crate::core::GeneratorConfig;
use crate::generation::{MappingExtractor, SnapshotLoader};

/// Lists handlers with a supported request mapping
pub struct ListHandlersUseCase {
    snapshot_loader: Arc<dyn SnapshotLoader>,
}

impl ListHandlersUseCase {
    pub fn new(snapshot_loader: Arc<dyn SnapshotLoader>) -> Self {
        Self { snapshot_loader }
    }

    pub async fn execute(
        &self,
        snapshot_path: &str,
    ) -> Result<Vec<HandlerSummary>, ApplicationError> {
        let snapshot = self.snapshot_loader.load(snapshot_path).await?;
        let config = GeneratorConfig::default();
        let extractor = MappingExtractor::new(&config);

        let summaries: Vec<HandlerSummary> = snapshot
            .handlers()
            .iter()
            .filter_map(|handler| {
                extractor.route(handler).map(|(method, path)| HandlerSummary {
                    name: handler.name.clone(),
                    method,
                    path,
                })
            })
            .collect();

        tracing::debug!(
            handlers = snapshot.handlers().len(),
            applicable = summaries.len(),
            "Listed handlers"
        );
        Ok(summaries)
    }
}
