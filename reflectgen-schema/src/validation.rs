//! Structural schema validation.
//!
//! Checks the invariants the generator relies on: every declared parent
//! exists, and the parent relation forms a forest rather than containing
//! cycles. Generation must not proceed past a failure here, since a broken
//! parent link would silently produce false ancestry facts downstream.

use crate::error::SchemaError;
use crate::store::Schema;
use std::collections::HashSet;

/// Validates a parsed schema for structural correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError::ParentNotFound` for a dangling parent link and
/// `SchemaError::InheritanceCycle` if a class is its own ancestor.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    for class in schema.iter() {
        walk_to_root(schema, &class.name)?;
    }
    Ok(())
}

/// Walks the parent chain upward from `start` until it terminates.
///
/// Explicit loop with a visited set: bounded stack depth on deep
/// hierarchies, and a revisit is reported as a cycle instead of looping.
fn walk_to_root(schema: &Schema, start: &str) -> Result<(), SchemaError> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut path: Vec<&str> = Vec::new();

    let mut current = schema
        .get(start)
        .ok_or_else(|| SchemaError::class_not_found(start))?;

    loop {
        if !visited.insert(current.name.as_str()) {
            path.push(current.name.as_str());
            return Err(SchemaError::cycle(path.join(" -> ")));
        }
        path.push(current.name.as_str());

        match &current.parent {
            None => return Ok(()),
            Some(parent) => {
                current = schema
                    .get(parent)
                    .ok_or_else(|| SchemaError::parent_not_found(&current.name, parent))?;
            }
        }
    }
}
