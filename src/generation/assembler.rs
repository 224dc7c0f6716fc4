//! Snippet assembly
//!
//! Renders the MockMvc call header and the REST Docs `document(..)` block
//! from a [`SnippetView`] through a single Tera template.

use tera::{Context, Tera};

use crate::core::GeneratorConfig;
use crate::generation::{DocumentedFields, GenerationError, HandlerDescriptor, SnippetView};

const TEMPLATE_NAME: &str = "restdoc";

// Whitespace is spelled out with escapes; nothing in the template is trimmed.
const RESTDOC_TEMPLATE: &str = concat!(
    "{{ client }}.perform({{ method }}({{ target }})",
    "{% for line in call_lines %}\n\t{{ line }}{% endfor %})",
    "\n\t.andDo(print())",
    "\n\t.andExpect(status().isOk())",
    "\n\t.andDo(",
    "\n\t\tdocument(\"{{ document }}\"",
    "{% for section in sections %},\n\t\t\t{{ section.name }}(\n\t\t\t\t{{ section.body }}\n\t\t\t){% endfor %}",
    "\n\t\t)",
    "\n\t);",
);

/// Combines a handler descriptor and its field entries into snippet text
pub struct DocumentAssembler<'c> {
    tera: Tera,
    config: &'c GeneratorConfig,
}

impl<'c> DocumentAssembler<'c> {
    pub fn new(config: &'c GeneratorConfig) -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        // generated Java must not be HTML-escaped
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, RESTDOC_TEMPLATE)
            .map_err(|e| GenerationError::RenderError(format!("Failed to add template: {e}")))?;
        Ok(Self { tera, config })
    }

    pub fn assemble(
        &self,
        descriptor: &HandlerDescriptor,
        fields: &DocumentedFields,
    ) -> Result<String, GenerationError> {
        let view = SnippetView::new(descriptor, fields, self.config);
        let context = Context::from_serialize(&view)?;
        let text = self.tera.render(TEMPLATE_NAME, &context)?;

        tracing::debug!(
            handler = %descriptor.method_name,
            sections = view.sections.len(),
            "Assembled snippet"
        );
        Ok(text)
    }
}
