//! Render context for the snippet template
//!
//! [`SnippetView`] is the flattened, already-escaped data the template needs:
//! the request builder call, its chained setters and the documentation
//! sections in their fixed order.

use serde::Serialize;

use crate::core::GeneratorConfig;
use crate::generation::sanitizers::escape_java_string;
use crate::generation::utils::to_snake_case;
use crate::generation::{DocumentedFields, HandlerDescriptor, ParameterDescriptor};

const ENTRY_SEPARATOR: &str = ",\n\t\t\t\t";

/// One `xxxParameters(..)` / `xxxFields(..)` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub name: &'static str,
    pub body: String,
}

impl SectionView {
    /// `None` when there is nothing to document
    fn from_entries(name: &'static str, entries: Vec<String>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            name,
            body: entries.join(ENTRY_SEPARATOR),
        })
    }
}

/// Template data for one handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetView {
    pub client: String,
    pub method: String,
    /// Arguments of the request builder: quoted path then path variables
    pub target: String,
    /// Setters chained onto the request builder, without the leading newline
    pub call_lines: Vec<String>,
    pub document: String,
    pub sections: Vec<SectionView>,
}

impl SnippetView {
    pub fn new(
        descriptor: &HandlerDescriptor,
        fields: &DocumentedFields,
        config: &GeneratorConfig,
    ) -> Self {
        let mut target = format!("\"{}\"", escape_java_string(&descriptor.path));
        for parameter in &descriptor.path_variables {
            target.push_str(", ");
            target.push_str(&parameter.variable);
        }

        let mut call_lines = Vec::new();
        if let Some(body) = &descriptor.body {
            call_lines.push(format!(".contentType({})", config.content_type));
            call_lines.push(format!(".accept({})", config.content_type));
            call_lines.push(format!(".content({})", body.variable));
        }
        if let Some(model) = &descriptor.model_attribute {
            call_lines.push(format!(".params({})", model.variable));
        }
        for param in &descriptor.query_params {
            call_lines.push(format!(
                ".param(\"{}\", {})",
                escape_java_string(&param.name),
                param.variable
            ));
        }

        let document = config
            .document_identifier
            .clone()
            .unwrap_or_else(|| to_snake_case(&descriptor.method_name));

        let request_parameters = descriptor
            .query_params
            .iter()
            .map(parameter_entry)
            .chain(fields.model_attribute.rendered())
            .collect();

        let sections = [
            SectionView::from_entries("requestParameters", request_parameters),
            SectionView::from_entries(
                "pathParameters",
                descriptor.path_variables.iter().map(parameter_entry).collect(),
            ),
            SectionView::from_entries("requestFields", fields.request_body.rendered()),
            SectionView::from_entries("responseFields", fields.response_body.rendered()),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            client: config.client_name.clone(),
            method: descriptor.http_method.to_string(),
            target,
            call_lines,
            document: escape_java_string(&document),
            sections,
        }
    }
}

fn parameter_entry(parameter: &ParameterDescriptor) -> String {
    format!(
        "parameterWithName(\"{}\").description(\"\")",
        escape_java_string(&parameter.name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{DocMode, FieldDocEntry, FieldDocSet, HttpMethod, ParameterRole};
    use crate::generation::classifier::JsonFieldType;
    use crate::model::TypeRef;

    fn descriptor() -> HandlerDescriptor {
        HandlerDescriptor {
            method_name: "searchItems".to_string(),
            http_method: HttpMethod::Post,
            path: "/shops/{shopId}/items".to_string(),
            path_variables: vec![ParameterDescriptor::new(
                "shopId",
                TypeRef::class("Long"),
                ParameterRole::PathVariable,
            )],
            query_params: vec![ParameterDescriptor::new(
                "page",
                TypeRef::class("Integer"),
                ParameterRole::QueryParam,
            )],
            body: Some(ParameterDescriptor::new(
                "item",
                TypeRef::class("Item"),
                ParameterRole::Body,
            )),
            model_attribute: Some(ParameterDescriptor::new(
                "filter",
                TypeRef::class("Filter"),
                ParameterRole::ModelAttribute,
            )),
            response: None,
        }
    }

    fn fields() -> DocumentedFields {
        DocumentedFields {
            request_body: FieldDocSet {
                mode: DocMode::RequestBody,
                entries: vec![FieldDocEntry::new("name", JsonFieldType::String)],
            },
            model_attribute: FieldDocSet {
                mode: DocMode::ModelAttribute,
                entries: vec![FieldDocEntry::new("status", JsonFieldType::String)],
            },
            response_body: FieldDocSet::empty(DocMode::ResponseBody),
        }
    }

    #[test]
    fn test_view_call_lines() {
        let view = SnippetView::new(&descriptor(), &fields(), &GeneratorConfig::default());

        assert_eq!(view.client, "mockMvc");
        assert_eq!(view.method, "post");
        assert_eq!(view.target, "\"/shops/{shopId}/items\", shopId");
        assert_eq!(
            view.call_lines,
            vec![
                ".contentType(MediaType.APPLICATION_JSON)",
                ".accept(MediaType.APPLICATION_JSON)",
                ".content(item)",
                ".params(filter)",
                ".param(\"page\", page)",
            ]
        );
        assert_eq!(view.document, "search_items");
    }

    #[test]
    fn test_view_sections_in_fixed_order() {
        let view = SnippetView::new(&descriptor(), &fields(), &GeneratorConfig::default());

        let names: Vec<_> = view.sections.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["requestParameters", "pathParameters", "requestFields"]);
        assert_eq!(
            view.sections[0].body,
            "parameterWithName(\"page\").description(\"\"),\n\t\t\t\tparameterWithName(\"status\").description(\"\")"
        );
    }

    #[test]
    fn test_bound_names_stay_keys() {
        let mut descriptor = descriptor();
        descriptor.path = "/shops/{shop-id}/items".to_string();
        descriptor.path_variables = vec![
            ParameterDescriptor::new("shopId", TypeRef::class("Long"), ParameterRole::PathVariable)
                .bound_as("shop-id"),
        ];
        descriptor.query_params = vec![
            ParameterDescriptor::new("sortOrder", TypeRef::class("String"), ParameterRole::QueryParam)
                .bound_as("sort-order"),
        ];

        let view = SnippetView::new(&descriptor, &fields(), &GeneratorConfig::default());
        assert_eq!(view.target, "\"/shops/{shop-id}/items\", shopId");
        assert_eq!(view.call_lines[4], ".param(\"sort-order\", sortOrder)");
        assert!(view.sections[0].body.starts_with("parameterWithName(\"sort-order\")"));
        assert_eq!(
            view.sections[1].body,
            "parameterWithName(\"shop-id\").description(\"\")"
        );
    }

    #[test]
    fn test_document_identifier_override() {
        let config = GeneratorConfig {
            document_identifier: Some("items-search".to_string()),
            ..Default::default()
        };
        let view = SnippetView::new(&descriptor(), &fields(), &config);
        assert_eq!(view.document, "items-search");
    }
}
