//! Non-fatal problems found during a generation pass
//!
//! Generation is permissive: a field it cannot document is skipped rather than
//! failing the whole handler. Every skip is recorded here and logged at `warn`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A skipped field, parameter or payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The host could not resolve the type of a field or payload
    UnresolvedType { path: String, type_name: String },

    /// A collection-like type without exactly one element type
    MalformedCollection {
        path: String,
        type_name: String,
        arguments: usize,
    },

    /// A class already on the traversal path
    CyclicReference { path: String, class_name: String },

    DepthLimitExceeded {
        path: String,
        class_name: String,
        max_depth: usize,
    },

    /// A request or response payload that has no fields to document
    ScalarPayload { type_name: String },

    /// A parameter carrying more than one role marker
    AmbiguousParameterRole {
        parameter: String,
        kept: String,
        ignored: Vec<String>,
    },

    /// A second body or model-attribute parameter
    DuplicateParameterRole { parameter: String, role: String },

    PathVariableMismatch {
        path: String,
        placeholders: usize,
        path_variables: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedType { path, type_name } => {
                write!(f, "cannot resolve type '{type_name}' at '{path}', skipped")
            }
            Diagnostic::MalformedCollection {
                path,
                type_name,
                arguments,
            } => write!(
                f,
                "collection '{type_name}' at '{path}' has {arguments} type arguments, expected 1"
            ),
            Diagnostic::CyclicReference { path, class_name } => {
                write!(f, "cyclic reference to '{class_name}' at '{path}', not expanded")
            }
            Diagnostic::DepthLimitExceeded {
                path,
                class_name,
                max_depth,
            } => write!(
                f,
                "'{class_name}' at '{path}' exceeds the nesting limit of {max_depth}"
            ),
            Diagnostic::ScalarPayload { type_name } => {
                write!(f, "payload type '{type_name}' has no fields to document")
            }
            Diagnostic::AmbiguousParameterRole {
                parameter,
                kept,
                ignored,
            } => write!(
                f,
                "parameter '{parameter}' has several role markers; using {kept}, ignoring {}",
                ignored.join(", ")
            ),
            Diagnostic::DuplicateParameterRole { parameter, role } => {
                write!(f, "parameter '{parameter}' is a second {role}, ignored")
            }
            Diagnostic::PathVariableMismatch {
                path,
                placeholders,
                path_variables,
            } => write!(
                f,
                "path '{path}' has {placeholders} placeholders but {path_variables} path variables"
            ),
        }
    }
}

/// Diagnostics collected during one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.0.push(diagnostic);
    }

    /// Append diagnostics that were already logged
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}
