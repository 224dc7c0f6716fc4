//! Program snapshots - a serialized view of the host program
//!
//! A snapshot lists the classes the generator may need to resolve and the
//! handler methods to document. It is the file-based stand-in for an IDE's
//! program structure API.

use serde::{Deserialize, Serialize};

use crate::model::{ClassIndex, ClassInfo, FieldInfo, HandlerMethod, TypeRef, TypeResolver};

/// On-disk layout of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
    #[serde(default)]
    pub handlers: Vec<HandlerMethod>,
}

/// Classes indexed for resolution plus the handlers to document
#[derive(Debug, Clone, Default)]
pub struct ProgramSnapshot {
    classes: ClassIndex,
    handlers: Vec<HandlerMethod>,
}

impl ProgramSnapshot {
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let document: SnapshotDocument = serde_json::from_str(content)?;
        Ok(document.into())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let document: SnapshotDocument = serde_yaml::from_str(content)?;
        Ok(document.into())
    }

    /// Handler by method name
    pub fn handler(&self, name: &str) -> Option<&HandlerMethod> {
        self.handlers.iter().find(|h| h.name == name)
    }

    pub fn handlers(&self) -> &[HandlerMethod] {
        &self.handlers
    }

    pub fn classes(&self) -> &ClassIndex {
        &self.classes
    }
}

impl From<SnapshotDocument> for ProgramSnapshot {
    fn from(document: SnapshotDocument) -> Self {
        let classes: ClassIndex = document.classes.into_iter().collect();
        tracing::debug!(
            classes = classes.len(),
            handlers = document.handlers.len(),
            "Indexed program snapshot"
        );
        Self {
            classes,
            handlers: document.handlers,
        }
    }
}

impl TypeResolver for ProgramSnapshot {
    fn resolve(&self, ty: &TypeRef) -> Option<&ClassInfo> {
        self.classes.resolve(ty)
    }

    fn fields_of<'c>(&self, class: &'c ClassInfo) -> &'c [FieldInfo] {
        self.classes.fields_of(class)
    }

    fn is_enum(&self, class: &ClassInfo) -> bool {
        self.classes.is_enum(class)
    }
}
