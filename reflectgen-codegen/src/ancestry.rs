//! Hierarchy-membership resolution.
//!
//! Answers the two per-class questions code generation hangs on: is the
//! class polymorphic (descends from, or is, the designated root type) and
//! is it a component (descends from, or is, the designated component root).
//! Both are derived from one primitive, an upward walk along parent links.

use reflectgen_schema::{Schema, SchemaError};
use std::collections::{BTreeMap, HashSet};

/// Names of the designated hierarchy roots.
#[derive(Debug, Clone)]
pub struct HierarchyConfig {
    /// Top of the polymorphic hierarchy. Dispatchable classes descend from
    /// it; generated Save/Restore never delegate to it.
    pub root: String,
    /// Root of the component category, eligible for Clone/CopyValueTo.
    pub component_root: String,
}

impl HierarchyConfig {
    /// Creates a config from the two root type names.
    #[must_use]
    pub fn new(root: impl Into<String>, component_root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            component_root: component_root.into(),
        }
    }
}

/// Resolved per-class hierarchy facts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassFacts {
    /// Class is the root type or one of its descendants.
    pub is_polymorphic: bool,
    /// Class is the component root or one of its descendants.
    pub is_component: bool,
}

/// Returns true if `class` is `ancestor` or one of its descendants.
///
/// Walks the parent chain upward with an explicit loop and visited set, so
/// a malformed schema surfaces as an error instead of unbounded recursion.
///
/// # Errors
/// Returns `SchemaError::ClassNotFound` if `class` is absent,
/// `SchemaError::ParentNotFound` for a dangling parent link, and
/// `SchemaError::InheritanceCycle` if a class repeats during the walk.
pub fn is_descendant_of(
    schema: &Schema,
    class: &str,
    ancestor: &str,
) -> Result<bool, SchemaError> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut path: Vec<&str> = Vec::new();

    let mut current = schema
        .get(class)
        .ok_or_else(|| SchemaError::class_not_found(class))?;

    loop {
        if current.name == ancestor {
            return Ok(true);
        }
        if !visited.insert(current.name.as_str()) {
            path.push(current.name.as_str());
            return Err(SchemaError::cycle(path.join(" -> ")));
        }
        path.push(current.name.as_str());

        match &current.parent {
            None => return Ok(false),
            Some(parent) => {
                current = schema
                    .get(parent)
                    .ok_or_else(|| SchemaError::parent_not_found(&current.name, parent))?;
            }
        }
    }
}

/// Resolves and caches hierarchy facts for every class in a schema.
#[derive(Debug)]
pub struct AncestryResolver {
    config: HierarchyConfig,
    facts: BTreeMap<String, ClassFacts>,
}

impl AncestryResolver {
    /// Resolves facts for all classes up front.
    ///
    /// # Errors
    /// Returns `SchemaError` if any parent chain is broken or cyclic; no
    /// partial fact set is produced.
    pub fn new(schema: &Schema, config: &HierarchyConfig) -> Result<Self, SchemaError> {
        let mut facts = BTreeMap::new();
        for class in schema.iter() {
            let resolved = ClassFacts {
                is_polymorphic: is_descendant_of(schema, &class.name, &config.root)?,
                is_component: is_descendant_of(schema, &class.name, &config.component_root)?,
            };
            facts.insert(class.name.clone(), resolved);
        }
        Ok(Self {
            config: config.clone(),
            facts,
        })
    }

    /// The config this resolver was built with.
    #[must_use]
    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Cached facts for a class, if it was in the schema.
    #[must_use]
    pub fn facts(&self, name: &str) -> Option<ClassFacts> {
        self.facts.get(name).copied()
    }

    /// True if the class descends from (or is) the root type.
    #[must_use]
    pub fn is_polymorphic(&self, name: &str) -> bool {
        self.facts(name).is_some_and(|f| f.is_polymorphic)
    }

    /// True if the class descends from (or is) the component root.
    #[must_use]
    pub fn is_component(&self, name: &str) -> bool {
        self.facts(name).is_some_and(|f| f.is_component)
    }
}
