//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::generation::{Diagnostic, FieldDocSet};
use crate::model::TypeRef;

/// HTTP methods a handler can be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Get all HTTP methods as an array
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Patch,
        ]
    }
}

/// Lowercase, as used by the MockMvc request builders (`get(..)`, `post(..)`)
impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "get"),
            HttpMethod::Post => write!(f, "post"),
            HttpMethod::Put => write!(f, "put"),
            HttpMethod::Delete => write!(f, "delete"),
            HttpMethod::Patch => write!(f, "patch"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = crate::generation::GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "patch" => Ok(HttpMethod::Patch),
            _ => Err(crate::generation::GenerationError::UnsupportedHttpMethod(
                s.to_string(),
            )),
        }
    }
}

/// How a handler parameter takes part in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterRole {
    PathVariable,
    QueryParam,
    Body,
    ModelAttribute,
    None,
}

impl fmt::Display for ParameterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterRole::PathVariable => write!(f, "path variable"),
            ParameterRole::QueryParam => write!(f, "query parameter"),
            ParameterRole::Body => write!(f, "request body"),
            ParameterRole::ModelAttribute => write!(f, "model attribute"),
            ParameterRole::None => write!(f, "unmarked parameter"),
        }
    }
}

/// A handler parameter with its decided role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Request-side key: path placeholder or query parameter name
    pub name: String,
    /// Java parameter passed as the argument
    pub variable: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub role: ParameterRole,
}

impl ParameterDescriptor {
    /// Bound under the parameter's own name
    pub fn new(variable: impl Into<String>, ty: TypeRef, role: ParameterRole) -> Self {
        let variable = variable.into();
        Self {
            name: variable.clone(),
            variable,
            ty,
            role,
        }
    }

    /// Bind under `name` (`@PathVariable("shop-id")`), keeping the Java variable
    pub fn bound_as(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Response payload after generic wrappers are removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// A pagination wrapper was removed, so the payload is a list of `ty`
    pub paginated: bool,
}

/// Everything the assembler needs to know about one handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerDescriptor {
    pub method_name: String,
    pub http_method: HttpMethod,
    pub path: String,
    pub path_variables: Vec<ParameterDescriptor>,
    pub query_params: Vec<ParameterDescriptor>,
    pub body: Option<ParameterDescriptor>,
    pub model_attribute: Option<ParameterDescriptor>,
    pub response: Option<ResponsePayload>,
}

/// Field entries for each documented payload of a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentedFields {
    pub request_body: FieldDocSet,
    pub model_attribute: FieldDocSet,
    pub response_body: FieldDocSet,
}

/// Generated snippet for one handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestDoc {
    pub descriptor: HandlerDescriptor,
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}
