//! Read-only type resolution port
//!
//! The generator never talks to a concrete program-structure API. Hosts
//! implement [`TypeResolver`] over whatever static analysis they have;
//! [`ClassIndex`] is the in-memory implementation used by snapshots and tests.

use std::collections::HashMap;

use crate::model::{ClassInfo, ClassKind, FieldInfo, TypeRef};

/// Resolves type references to classes
pub trait TypeResolver {
    /// Resolve a class type; `None` when the host cannot find it
    fn resolve(&self, ty: &TypeRef) -> Option<&ClassInfo>;

    /// Declared fields in source order
    fn fields_of<'c>(&self, class: &'c ClassInfo) -> &'c [FieldInfo] {
        &class.fields
    }

    fn is_enum(&self, class: &ClassInfo) -> bool {
        class.kind == ClassKind::Enum
    }
}

/// In-memory class lookup by qualified or unambiguous simple name
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    classes: Vec<ClassInfo>,
    by_name: HashMap<String, usize>,
    // None marks a simple name shared by several classes
    by_simple_name: HashMap<String, Option<usize>>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, replacing any previous class with the same name
    pub fn insert(&mut self, class: ClassInfo) {
        if let Some(&slot) = self.by_name.get(&class.name) {
            tracing::debug!(class = %class.name, "Replacing duplicate class definition");
            self.classes[slot] = class;
            return;
        }

        let slot = self.classes.len();
        self.by_name.insert(class.name.clone(), slot);
        self.by_simple_name
            .entry(class.simple_name().to_string())
            .and_modify(|existing| *existing = None)
            .or_insert(Some(slot));
        self.classes.push(class);
    }

    /// Look up by exact name; an unqualified name may also match an
    /// unambiguous simple name
    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        if let Some(&slot) = self.by_name.get(name) {
            return Some(&self.classes[slot]);
        }
        if name.contains('.') {
            return None;
        }
        self.by_simple_name
            .get(name)
            .copied()
            .flatten()
            .map(|slot| &self.classes[slot])
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.iter()
    }
}

impl FromIterator<ClassInfo> for ClassIndex {
    fn from_iter<I: IntoIterator<Item = ClassInfo>>(iter: I) -> Self {
        let mut index = ClassIndex::new();
        for class in iter {
            index.insert(class);
        }
        index
    }
}

impl TypeResolver for ClassIndex {
    fn resolve(&self, ty: &TypeRef) -> Option<&ClassInfo> {
        match ty {
            TypeRef::Class { name, .. } => self.get(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ClassIndex {
        [
            ClassInfo::new("com.acme.user.Address"),
            ClassInfo::new("com.acme.user.User"),
            ClassInfo::new("com.acme.billing.Invoice"),
            ClassInfo::new("com.acme.billing.Address"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_by_qualified_name() {
        let index = index();
        let class = index.resolve(&TypeRef::class("com.acme.user.User")).unwrap();
        assert_eq!(class.name, "com.acme.user.User");
    }

    #[test]
    fn test_resolve_by_unique_simple_name() {
        let index = index();
        assert_eq!(
            index.resolve(&TypeRef::class("Invoice")).unwrap().name,
            "com.acme.billing.Invoice"
        );
    }

    #[test]
    fn test_unknown_qualified_name_does_not_fall_back() {
        let index = index();
        assert!(index.resolve(&TypeRef::class("org.other.User")).is_none());
        assert!(index.get("java.util.Currency").is_none());
    }

    #[test]
    fn test_ambiguous_simple_name_does_not_resolve() {
        let index = index();
        assert!(index.resolve(&TypeRef::class("Address")).is_none());
        assert!(
            index
                .resolve(&TypeRef::class("com.acme.billing.Address"))
                .is_some()
        );
    }

    #[test]
    fn test_non_class_types_do_not_resolve() {
        let index = index();
        assert!(index.resolve(&TypeRef::Wildcard).is_none());
        assert!(
            index
                .resolve(&TypeRef::array(TypeRef::class("com.acme.user.User")))
                .is_none()
        );
    }

    #[test]
    fn test_insert_replaces_duplicate() {
        let mut index = index();
        index.insert(
            ClassInfo::new("com.acme.user.User").with_field("id", TypeRef::class("Long")),
        );
        assert_eq!(index.len(), 4);
        assert_eq!(index.get("com.acme.user.User").unwrap().fields.len(), 1);
    }
}
