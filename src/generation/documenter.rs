//! Recursive field documentation
//!
//! [`FieldDocumenter`] walks the declared fields of a class and flattens them
//! into REST Docs entries. Nested objects extend the path with `.`, collection
//! elements with `.[].`, and a collection-like root starts the path with `[].`.
//! Anything that cannot be documented is skipped and reported as a
//! [`Diagnostic`].

use serde::{Deserialize, Serialize};

use crate::core::GeneratorConfig;
use crate::generation::classifier::{self, JsonFieldType};
use crate::generation::sanitizers::escape_java_string;
use crate::generation::{Diagnostic, Diagnostics};
use crate::model::{ClassInfo, TypeRef, TypeResolver};

/// Which part of the request or response a set of entries documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocMode {
    RequestBody,
    ResponseBody,
    ModelAttribute,
}

/// One documented leaf field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDocEntry {
    pub path: String,
    pub json_type: JsonFieldType,
    pub description: String,
}

impl FieldDocEntry {
    pub fn new(path: impl Into<String>, json_type: JsonFieldType) -> Self {
        Self {
            path: path.into(),
            json_type,
            description: String::new(),
        }
    }

    /// Render as a REST Docs descriptor call
    pub fn render(&self, mode: DocMode) -> String {
        let path = escape_java_string(&self.path);
        let description = escape_java_string(&self.description);
        match mode {
            DocMode::RequestBody | DocMode::ResponseBody => format!(
                "fieldWithPath(\"{path}\").type(JsonFieldType.{}).description(\"{description}\")",
                self.json_type
            ),
            DocMode::ModelAttribute => {
                format!("parameterWithName(\"{path}\").description(\"{description}\")")
            }
        }
    }
}

/// Ordered entries for one payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDocSet {
    pub mode: DocMode,
    pub entries: Vec<FieldDocEntry>,
}

impl FieldDocSet {
    pub fn empty(mode: DocMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDocEntry> {
        self.entries.iter()
    }

    /// Each entry rendered in this set's mode
    pub fn rendered(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.render(self.mode)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Directly declared on a class
    Field,
    /// Element of a collection or array
    Element,
}

/// Walks class field graphs into flat entry lists
pub struct FieldDocumenter<'a, R: TypeResolver + ?Sized> {
    resolver: &'a R,
    max_depth: usize,
    skip_static_fields: bool,
    // class names on the current traversal path
    stack: Vec<String>,
    diagnostics: Diagnostics,
}

impl<'a, R: TypeResolver + ?Sized> FieldDocumenter<'a, R> {
    pub fn new(resolver: &'a R, config: &GeneratorConfig) -> Self {
        Self {
            resolver,
            max_depth: config.max_depth,
            skip_static_fields: config.skip_static_fields,
            stack: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Document the fields of `class`, each path starting with `prefix`
    pub fn document(&mut self, class: &ClassInfo, prefix: &str, mode: DocMode) -> FieldDocSet {
        let mut entries = Vec::new();
        self.descend(class, prefix, prefix.trim_end_matches('.'), &mut entries);
        FieldDocSet { mode, entries }
    }

    /// Document a payload type
    ///
    /// Collection-like roots (and `collection_root`, used for paginated
    /// responses) add a `[].` prefix per level and document the element type.
    pub fn document_root(&mut self, ty: &TypeRef, collection_root: bool, mode: DocMode) -> FieldDocSet {
        let mut prefix = String::new();
        if collection_root {
            prefix.push_str("[].");
        }

        let mut current = ty;
        loop {
            match collection_element(current) {
                Some(Ok(element)) => {
                    prefix.push_str("[].");
                    current = element;
                }
                Some(Err(arguments)) => {
                    self.diagnostics.push(Diagnostic::MalformedCollection {
                        path: root_path(&prefix),
                        type_name: current.erased_name(),
                        arguments,
                    });
                    return FieldDocSet::empty(mode);
                }
                None => break,
            }
        }

        let resolver: &'a R = self.resolver;
        let class = match current {
            TypeRef::Primitive(_) => None,
            TypeRef::Class { name, .. } if classifier::is_common_leaf(name) => None,
            TypeRef::Class { .. } => match resolver.resolve(current) {
                Some(class) if resolver.is_enum(class) => None,
                Some(class) => Some(class),
                None => {
                    self.diagnostics.push(Diagnostic::UnresolvedType {
                        path: root_path(&prefix),
                        type_name: current.to_string(),
                    });
                    return FieldDocSet::empty(mode);
                }
            },
            TypeRef::Wildcard | TypeRef::Array(_) => {
                self.diagnostics.push(Diagnostic::UnresolvedType {
                    path: root_path(&prefix),
                    type_name: current.to_string(),
                });
                return FieldDocSet::empty(mode);
            }
        };

        match class {
            Some(class) => self.document(class, &prefix, mode),
            None => {
                self.diagnostics.push(Diagnostic::ScalarPayload {
                    type_name: ty.to_string(),
                });
                FieldDocSet::empty(mode)
            }
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn descend(
        &mut self,
        class: &ClassInfo,
        prefix: &str,
        path: &str,
        entries: &mut Vec<FieldDocEntry>,
    ) {
        if self.stack.iter().any(|name| name == &class.name) {
            self.diagnostics.push(Diagnostic::CyclicReference {
                path: path.to_string(),
                class_name: class.name.clone(),
            });
            return;
        }
        if self.stack.len() >= self.max_depth {
            self.diagnostics.push(Diagnostic::DepthLimitExceeded {
                path: path.to_string(),
                class_name: class.name.clone(),
                max_depth: self.max_depth,
            });
            return;
        }

        tracing::debug!(class = %class.name, prefix, "Documenting fields");
        self.stack.push(class.name.clone());
        for field in self.resolver.fields_of(class) {
            if field.is_static && self.skip_static_fields {
                continue;
            }
            let field_path = format!("{prefix}{}", field.name);
            self.walk(&field.ty, field_path, Position::Field, entries);
        }
        self.stack.pop();
    }

    fn walk(
        &mut self,
        ty: &TypeRef,
        path: String,
        position: Position,
        entries: &mut Vec<FieldDocEntry>,
    ) {
        let resolver: &'a R = self.resolver;
        match ty {
            TypeRef::Primitive(primitive) => {
                entries.push(FieldDocEntry::new(
                    path,
                    JsonFieldType::for_type_name(primitive.name()),
                ));
            }
            TypeRef::Wildcard => self.diagnostics.push(Diagnostic::UnresolvedType {
                path,
                type_name: ty.to_string(),
            }),
            TypeRef::Array(element) => self.walk_element(element, path, position, entries),
            TypeRef::Class { name, arguments } => {
                // common leaf names short-circuit before collection and object handling
                if classifier::is_common_leaf(name) {
                    entries.push(FieldDocEntry::new(path, JsonFieldType::for_type_name(name)));
                    return;
                }

                if classifier::is_collection(name) {
                    match arguments.as_slice() {
                        [element] => self.walk_element(element, path, position, entries),
                        _ => self.diagnostics.push(Diagnostic::MalformedCollection {
                            path,
                            type_name: name.clone(),
                            arguments: arguments.len(),
                        }),
                    }
                    return;
                }

                match resolver.resolve(ty) {
                    Some(class) if resolver.is_enum(class) => {
                        entries.push(FieldDocEntry::new(path, JsonFieldType::String));
                    }
                    Some(class) => {
                        let prefix = match position {
                            Position::Field => format!("{path}."),
                            Position::Element => format!("{path}.[]."),
                        };
                        self.descend(class, &prefix, &path, entries);
                    }
                    None => self.diagnostics.push(Diagnostic::UnresolvedType {
                        path,
                        type_name: ty.to_string(),
                    }),
                }
            }
        }
    }

    /// A leaf element is documented at the collection's own path
    fn walk_element(
        &mut self,
        element: &TypeRef,
        path: String,
        position: Position,
        entries: &mut Vec<FieldDocEntry>,
    ) {
        let element_path = match position {
            Position::Field => path,
            Position::Element => format!("{path}.[]"),
        };
        self.walk(element, element_path, Position::Element, entries);
    }
}

/// Element type of an array or collection; `Err` carries a bad argument count
fn collection_element(ty: &TypeRef) -> Option<Result<&TypeRef, usize>> {
    match ty {
        TypeRef::Array(element) => Some(Ok(element)),
        TypeRef::Class { name, arguments } if classifier::is_collection(name) => {
            match arguments.as_slice() {
                [element] => Some(Ok(element)),
                _ => Some(Err(arguments.len())),
            }
        }
        _ => None,
    }
}

fn root_path(prefix: &str) -> String {
    prefix.trim_end_matches('.').to_string()
}
