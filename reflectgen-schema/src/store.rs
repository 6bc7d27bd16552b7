//! Read-only schema snapshot.
//!
//! The store keeps class descriptors in a key-ordered map so that every
//! traversal during generation is deterministic. It is built once from a
//! snapshot and never mutated afterwards; two runs over the same snapshot
//! must visit classes in the same order.

use crate::classes::ClassDescriptor;
use std::collections::BTreeMap;

/// Ordered, immutable collection of class descriptors keyed by
/// fully-qualified name.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    classes: BTreeMap<String, ClassDescriptor>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from already-keyed descriptors.
    #[must_use]
    pub fn from_classes(classes: BTreeMap<String, ClassDescriptor>) -> Self {
        Self { classes }
    }

    /// Looks up a class by fully-qualified name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    /// Returns true if a class with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of classes in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the schema holds no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates all classes in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    /// Iterates classes whose scope prefix starts with `prefix`, in key
    /// order. Prefix match rather than equality, so a parent scope's output
    /// can pick up nested sub-scopes.
    pub fn classes_in_scope<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ClassDescriptor> {
        self.classes
            .values()
            .filter(move |c| c.scope_prefix.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{ClassFlags, MemberDescriptor};

    fn class(name: &str, scope: &str) -> ClassDescriptor {
        ClassDescriptor {
            name: name.to_string(),
            parent: None,
            members: vec![MemberDescriptor::new("m_value", "int")],
            header_file: format!("{}.hpp", name),
            scope_prefix: scope.to_string(),
            flags: ClassFlags::default(),
        }
    }

    fn schema_of(classes: Vec<ClassDescriptor>) -> Schema {
        Schema::from_classes(
            classes
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        )
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let schema = schema_of(vec![
            class("engine::Zebra", "engine"),
            class("engine::Apple", "engine"),
            class("engine::Mango", "engine"),
        ]);

        let names: Vec<&str> = schema.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["engine::Apple", "engine::Mango", "engine::Zebra"]);
    }

    #[test]
    fn test_scope_filter_is_prefix_match() {
        let schema = schema_of(vec![
            class("engine::Camera", "engine"),
            class("engine::animation::Clip", "engine::animation"),
            class("editor::Inspector", "editor"),
        ]);

        let names: Vec<&str> = schema
            .classes_in_scope("engine")
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["engine::Camera", "engine::animation::Clip"]);

        let nested: Vec<&str> = schema
            .classes_in_scope("engine::animation")
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(nested, vec!["engine::animation::Clip"]);
    }

    #[test]
    fn test_lookup() {
        let schema = schema_of(vec![class("engine::Camera", "engine")]);
        assert!(schema.contains("engine::Camera"));
        assert!(schema.get("engine::Light").is_none());
        assert_eq!(schema.len(), 1);
        assert!(!schema.is_empty());
    }
}
