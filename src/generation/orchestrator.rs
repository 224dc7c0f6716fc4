//! Generation orchestration - coordinates one generation pass per handler

use crate::core::GeneratorConfig;
use crate::generation::{
    Diagnostics, DocMode, DocumentAssembler, DocumentedFields, FieldDocSet, FieldDocumenter,
    GenerationError, HandlerDescriptor, MappingExtractor, OutputSink, RestDoc,
};
use crate::model::{HandlerMethod, TypeResolver};

/// Turns handler methods into REST Docs snippets
pub struct RestDocGenerator<'a, R: TypeResolver + ?Sized> {
    resolver: &'a R,
    config: &'a GeneratorConfig,
    extractor: MappingExtractor<'a>,
    assembler: DocumentAssembler<'a>,
}

impl<'a, R: TypeResolver + ?Sized> RestDocGenerator<'a, R> {
    pub fn new(resolver: &'a R, config: &'a GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self {
            resolver,
            config,
            extractor: MappingExtractor::new(config),
            assembler: DocumentAssembler::new(config)?,
        })
    }

    /// Whether the handler has a mapping this generator can document
    pub fn is_applicable(&self, handler: &HandlerMethod) -> bool {
        self.extractor.resolve_mapping(handler).is_some()
    }

    pub fn describe(
        &self,
        handler: &HandlerMethod,
        diagnostics: &mut Diagnostics,
    ) -> Option<HandlerDescriptor> {
        self.extractor.extract(handler, diagnostics)
    }

    /// Generate the snippet for one handler; `Ok(None)` when it is not applicable
    pub fn generate(&self, handler: &HandlerMethod) -> Result<Option<RestDoc>, GenerationError> {
        let mut diagnostics = Diagnostics::new();
        let Some(descriptor) = self.describe(handler, &mut diagnostics) else {
            tracing::debug!(handler = %handler.name, "No supported request mapping, skipping");
            return Ok(None);
        };

        let fields = self.document_fields(&descriptor, &mut diagnostics);
        let text = self.assembler.assemble(&descriptor, &fields)?;

        tracing::info!(
            handler = %descriptor.method_name,
            method = %descriptor.http_method,
            path = %descriptor.path,
            diagnostics = diagnostics.len(),
            "Generated REST Docs snippet"
        );

        Ok(Some(RestDoc {
            descriptor,
            text,
            diagnostics: diagnostics.into_vec(),
        }))
    }

    /// Generate and hand the text to `sink`; nothing is published when not applicable
    pub fn generate_and_publish(
        &self,
        handler: &HandlerMethod,
        sink: &dyn OutputSink,
    ) -> Result<Option<RestDoc>, GenerationError> {
        let doc = self.generate(handler)?;
        if let Some(doc) = &doc {
            sink.publish(&doc.text)?;
        }
        Ok(doc)
    }

    fn document_fields(
        &self,
        descriptor: &HandlerDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> DocumentedFields {
        let mut documenter = FieldDocumenter::new(self.resolver, self.config);

        let request_body = match &descriptor.body {
            Some(body) => documenter.document_root(&body.ty, false, DocMode::RequestBody),
            None => FieldDocSet::empty(DocMode::RequestBody),
        };
        let model_attribute = match &descriptor.model_attribute {
            Some(model) => documenter.document_root(&model.ty, false, DocMode::ModelAttribute),
            None => FieldDocSet::empty(DocMode::ModelAttribute),
        };
        let response_body = match &descriptor.response {
            Some(payload) => {
                documenter.document_root(&payload.ty, payload.paginated, DocMode::ResponseBody)
            }
            None => FieldDocSet::empty(DocMode::ResponseBody),
        };

        diagnostics.extend(documenter.into_diagnostics());
        DocumentedFields {
            request_body,
            model_attribute,
            response_body,
        }
    }
}
