//! Request mapping extraction
//!
//! Reads a handler's mapping annotation, parameter markers and return type
//! into a [`HandlerDescriptor`]. Annotation attribute values arrive as source
//! text (`"/users/{id}"`, `{"/a", "/b"}`, `RequestMethod.POST`) and are
//! interpreted here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::GeneratorConfig;
use crate::generation::sanitizers::unquote_java_string;
use crate::generation::utils::join_paths;
use crate::generation::{
    Diagnostic, Diagnostics, HandlerDescriptor, HttpMethod, ParameterDescriptor, ParameterRole,
    ResponsePayload,
};
use crate::model::{Annotation, HandlerMethod, ParamInfo, TypeRef};

static PATH_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}/]*\}").expect("placeholder pattern is valid"));

/// Method-level annotations that make a method a request handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingAnnotation {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Request,
}

impl MappingAnnotation {
    /// Match a reference name as returned by [`Annotation::reference_name`]
    pub fn from_name(name: &str) -> Option<Self> {
        let mapping = match name {
            "GetMapping" => MappingAnnotation::Get,
            "PostMapping" => MappingAnnotation::Post,
            "PutMapping" => MappingAnnotation::Put,
            "DeleteMapping" => MappingAnnotation::Delete,
            "PatchMapping" => MappingAnnotation::Patch,
            "RequestMapping" => MappingAnnotation::Request,
            _ => return None,
        };
        Some(mapping)
    }

    /// HTTP method implied by the annotation itself; `None` for `RequestMapping`
    pub fn fixed_method(self) -> Option<HttpMethod> {
        match self {
            MappingAnnotation::Get => Some(HttpMethod::Get),
            MappingAnnotation::Post => Some(HttpMethod::Post),
            MappingAnnotation::Put => Some(HttpMethod::Put),
            MappingAnnotation::Delete => Some(HttpMethod::Delete),
            MappingAnnotation::Patch => Some(HttpMethod::Patch),
            MappingAnnotation::Request => None,
        }
    }
}

/// Parameter-level role markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterAnnotation {
    PathVariable,
    RequestParam,
    RequestBody,
    ModelAttribute,
}

impl ParameterAnnotation {
    /// Match a reference name as returned by [`Annotation::reference_name`]
    pub fn from_name(name: &str) -> Option<Self> {
        let marker = match name {
            "PathVariable" => ParameterAnnotation::PathVariable,
            "RequestParam" => ParameterAnnotation::RequestParam,
            "RequestBody" => ParameterAnnotation::RequestBody,
            "ModelAttribute" => ParameterAnnotation::ModelAttribute,
            _ => return None,
        };
        Some(marker)
    }

    pub fn name(self) -> &'static str {
        match self {
            ParameterAnnotation::PathVariable => "PathVariable",
            ParameterAnnotation::RequestParam => "RequestParam",
            ParameterAnnotation::RequestBody => "RequestBody",
            ParameterAnnotation::ModelAttribute => "ModelAttribute",
        }
    }

    pub fn role(self) -> ParameterRole {
        match self {
            ParameterAnnotation::PathVariable => ParameterRole::PathVariable,
            ParameterAnnotation::RequestParam => ParameterRole::QueryParam,
            ParameterAnnotation::RequestBody => ParameterRole::Body,
            ParameterAnnotation::ModelAttribute => ParameterRole::ModelAttribute,
        }
    }
}

/// Role of a parameter from its first marker annotation
pub fn parameter_role(parameter: &ParamInfo) -> ParameterRole {
    parameter
        .annotations
        .iter()
        .find_map(|a| ParameterAnnotation::from_name(a.reference_name()))
        .map_or(ParameterRole::None, ParameterAnnotation::role)
}

/// Builds [`HandlerDescriptor`]s from handler methods
pub struct MappingExtractor<'c> {
    config: &'c GeneratorConfig,
}

impl<'c> MappingExtractor<'c> {
    pub fn new(config: &'c GeneratorConfig) -> Self {
        Self { config }
    }

    /// First recognized mapping annotation and the HTTP method it maps to
    ///
    /// `None` when the handler has no mapping annotation or a `RequestMapping`
    /// names a method that cannot be documented.
    pub fn resolve_mapping<'h>(
        &self,
        handler: &'h HandlerMethod,
    ) -> Option<(&'h Annotation, HttpMethod)> {
        let (annotation, kind) = handler
            .annotations
            .iter()
            .find_map(|a| MappingAnnotation::from_name(a.reference_name()).map(|kind| (a, kind)))?;

        match kind.fixed_method() {
            Some(method) => Some((annotation, method)),
            None => request_mapping_method(annotation).map(|method| (annotation, method)),
        }
    }

    /// HTTP method and full request path, without looking at parameters
    pub fn route(&self, handler: &HandlerMethod) -> Option<(HttpMethod, String)> {
        let (annotation, http_method) = self.resolve_mapping(handler)?;
        Some((http_method, request_path(handler, annotation)))
    }

    pub fn extract(
        &self,
        handler: &HandlerMethod,
        diagnostics: &mut Diagnostics,
    ) -> Option<HandlerDescriptor> {
        let (annotation, http_method) = self.resolve_mapping(handler)?;
        let path = request_path(handler, annotation);

        let mut descriptor = HandlerDescriptor {
            method_name: handler.name.clone(),
            http_method,
            path,
            path_variables: Vec::new(),
            query_params: Vec::new(),
            body: None,
            model_attribute: None,
            response: self.unwrap_response(handler.return_type.as_ref()),
        };

        for parameter in &handler.parameters {
            self.assign_parameter(parameter, &mut descriptor, diagnostics);
        }

        let placeholders = PATH_PLACEHOLDER.find_iter(&descriptor.path).count();
        if placeholders != descriptor.path_variables.len() {
            diagnostics.push(Diagnostic::PathVariableMismatch {
                path: descriptor.path.clone(),
                placeholders,
                path_variables: descriptor.path_variables.len(),
            });
        }

        tracing::debug!(
            handler = %descriptor.method_name,
            method = %descriptor.http_method,
            path = %descriptor.path,
            "Extracted request mapping"
        );
        Some(descriptor)
    }

    fn assign_parameter(
        &self,
        parameter: &ParamInfo,
        descriptor: &mut HandlerDescriptor,
        diagnostics: &mut Diagnostics,
    ) {
        let markers: Vec<(ParameterAnnotation, &Annotation)> = parameter
            .annotations
            .iter()
            .filter_map(|a| ParameterAnnotation::from_name(a.reference_name()).map(|m| (m, a)))
            .collect();
        let Some(&(marker, annotation)) = markers.first() else {
            return;
        };

        if markers.len() > 1 {
            diagnostics.push(Diagnostic::AmbiguousParameterRole {
                parameter: parameter.name.clone(),
                kept: marker.name().to_string(),
                ignored: markers[1..].iter().map(|(m, _)| m.name().to_string()).collect(),
            });
        }

        let role = marker.role();
        match role {
            ParameterRole::PathVariable | ParameterRole::QueryParam => {
                let bound = ParameterDescriptor::new(&parameter.name, parameter.ty.clone(), role)
                    .bound_as(bound_name(annotation, &parameter.name));
                if role == ParameterRole::PathVariable {
                    descriptor.path_variables.push(bound);
                } else {
                    descriptor.query_params.push(bound);
                }
            }
            ParameterRole::Body | ParameterRole::ModelAttribute => {
                let slot = if role == ParameterRole::Body {
                    &mut descriptor.body
                } else {
                    &mut descriptor.model_attribute
                };
                if slot.is_some() {
                    diagnostics.push(Diagnostic::DuplicateParameterRole {
                        parameter: parameter.name.clone(),
                        role: role.to_string(),
                    });
                } else {
                    *slot = Some(ParameterDescriptor::new(
                        parameter.name.clone(),
                        parameter.ty.clone(),
                        role,
                    ));
                }
            }
            ParameterRole::None => {}
        }
    }

    /// Peel response and pagination wrappers off the declared return type
    pub fn unwrap_response(&self, return_type: Option<&TypeRef>) -> Option<ResponsePayload> {
        let mut current = return_type?;
        let mut paginated = false;

        loop {
            if current.is_void() || matches!(current, TypeRef::Wildcard) {
                return None;
            }
            let TypeRef::Class { name, arguments } = current else {
                break;
            };
            let is_page = self.config.is_page_wrapper(name);
            if !is_page && !self.config.is_response_wrapper(name) {
                break;
            }
            // a raw wrapper carries no payload type
            current = arguments.first()?;
            paginated |= is_page;
        }

        Some(ResponsePayload {
            ty: current.clone(),
            paginated,
        })
    }
}

/// HTTP method named by a `RequestMapping`'s `method` attribute
fn request_mapping_method(annotation: &Annotation) -> Option<HttpMethod> {
    let Some(raw) = annotation.attribute("method") else {
        return Some(HttpMethod::Get);
    };

    let first = first_element(raw);
    if first.is_empty() {
        return Some(HttpMethod::Get);
    }
    let constant = first.rsplit('.').next().unwrap_or(first);
    match constant.parse::<HttpMethod>() {
        Ok(method) => Some(method),
        Err(_) => {
            tracing::debug!(method = %raw, "Unsupported RequestMapping method");
            None
        }
    }
}

/// Method path joined behind the controller's `RequestMapping` path
fn request_path(handler: &HandlerMethod, annotation: &Annotation) -> String {
    let base_path = handler
        .controller_annotations
        .iter()
        .find(|a| MappingAnnotation::from_name(a.reference_name()) == Some(MappingAnnotation::Request))
        .map(mapping_path)
        .unwrap_or_default();
    join_paths(&base_path, &mapping_path(annotation))
}

/// Path from `value`, else `path`; empty when neither is set
fn mapping_path(annotation: &Annotation) -> String {
    annotation
        .attribute("value")
        .or_else(|| annotation.attribute("path"))
        .map(first_string_literal)
        .unwrap_or_default()
}

/// `value`/`name` attribute of a PathVariable or RequestParam, else the parameter name
fn bound_name(annotation: &Annotation, parameter_name: &str) -> String {
    annotation
        .attribute("value")
        .or_else(|| annotation.attribute("name"))
        .map(first_string_literal)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| parameter_name.to_string())
}

/// First element of an attribute value with quotes removed
fn first_string_literal(raw: &str) -> String {
    unquote_java_string(first_element(raw))
}

/// First element of an array initializer (`{a, b}`); a single value is returned as is
fn first_element(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed);

    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in inner.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            ',' if !in_string => return inner[..offset].trim(),
            _ => {}
        }
    }
    inner.trim()
}
