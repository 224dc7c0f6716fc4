//! Resolved classes and their declared fields

use serde::{Deserialize, Serialize};

use crate::model::TypeRef;

/// Kind of a resolved class declaration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
}

/// A declared field, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, rename = "static", skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
        }
    }

    /// Mark this field as `static`
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A class as resolved by the host's program model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Canonical (fully qualified) name
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class,
            fields: Vec::new(),
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            kind: ClassKind::Enum,
            ..Self::new(name)
        }
    }

    /// Append a field declaration
    pub fn with_field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldInfo::new(name, ty));
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldInfo>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }
}

/// Last segment of a dotted name
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_builder_keeps_field_order() {
        let class = ClassInfo::new("com.acme.User")
            .with_field("id", TypeRef::class("java.lang.Long"))
            .with_field("name", TypeRef::class("java.lang.String"));

        let names: Vec<_> = class.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
        assert_eq!(class.simple_name(), "User");
        assert!(!class.is_enum());
    }

    #[test]
    fn test_deserialize_class() {
        let class: ClassInfo = serde_json::from_str(
            r#"{
                "name": "com.acme.Status",
                "kind": "enum"
            }"#,
        )
        .unwrap();
        assert!(class.is_enum());
        assert!(class.fields.is_empty());

        let field: FieldInfo =
            serde_json::from_str(r#"{"name": "VERSION", "type": "long", "static": true}"#).unwrap();
        assert!(field.is_static);
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("java.time.LocalDate"), "LocalDate");
        assert_eq!(simple_name("LocalDate"), "LocalDate");
    }
}
