//! Handler methods, their parameters and annotations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{TypeRef, simple_name};

/// An annotation with its attribute values kept as source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute; `value` is raw source text such as `"/users"` or `RequestMethod.POST`
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Reference name without package or leading `@`
    pub fn reference_name(&self) -> &str {
        simple_name(self.name.trim_start_matches('@'))
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// A handler method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ParamInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// One method unit handed over by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerMethod {
    pub name: String,
    /// Annotations on the declaring controller class
    #[serde(default)]
    pub controller_annotations: Vec<Annotation>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub parameters: Vec<ParamInfo>,
    #[serde(default)]
    pub return_type: Option<TypeRef>,
}

impl HandlerMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller_annotations: Vec::new(),
            annotations: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn in_controller(mut self, annotation: Annotation) -> Self {
        self.controller_annotations.push(annotation);
        self
    }

    pub fn with_parameter(mut self, parameter: ParamInfo) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }
}
