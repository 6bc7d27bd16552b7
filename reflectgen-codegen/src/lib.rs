//! # reflectgen Codegen
//!
//! C++ code generation from class hierarchy schemas.
//!
//! This crate provides:
//! - Ancestry resolution (polymorphic / component facts per class)
//! - Save/Restore/Clone/CopyValueTo method generation
//! - Runtime-type dispatch table generation

pub mod ancestry;
pub mod cpp;
pub mod error;

pub use ancestry::{AncestryResolver, ClassFacts, HierarchyConfig, is_descendant_of};
pub use cpp::{DispatchGenerator, SerializationGenerator};
pub use error::CodegenError;

use reflectgen_schema::Schema;

/// Generates the serialization translation unit for one scope prefix.
///
/// # Arguments
/// * `schema` - Validated schema snapshot
/// * `config` - Designated root type names
/// * `scope_prefix` - Scope partition to generate (prefix match)
///
/// # Returns
/// Generated C++ source as a string.
///
/// # Errors
/// Returns `CodegenError` if ancestry resolution fails on a broken or
/// cyclic parent chain.
pub fn generate_serialization(
    schema: &Schema,
    config: &HierarchyConfig,
    scope_prefix: &str,
) -> Result<String, CodegenError> {
    let resolver = AncestryResolver::new(schema, config)?;
    Ok(SerializationGenerator::new(schema, &resolver).generate(scope_prefix))
}

/// Generates the dispatch table artifact.
///
/// # Arguments
/// * `schema` - Validated schema snapshot
/// * `config` - Designated root type names
/// * `scope` - Namespace wrapping the generated function
///
/// # Returns
/// Generated C++ source as a string.
///
/// # Errors
/// Returns `CodegenError` if ancestry resolution fails.
pub fn generate_dispatch(
    schema: &Schema,
    config: &HierarchyConfig,
    scope: &str,
) -> Result<String, CodegenError> {
    let resolver = AncestryResolver::new(schema, config)?;
    Ok(DispatchGenerator::new(schema, &resolver).generate(scope))
}

/// Parses, validates, and generates in one call from a JSON snapshot.
///
/// # Arguments
/// * `json` - Schema snapshot content
/// * `config` - Designated root type names
/// * `scope_prefix` - Scope partition to generate
///
/// # Returns
/// Generated C++ source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_json(
    json: &str,
    config: &HierarchyConfig,
    scope_prefix: &str,
) -> Result<String, CodegenError> {
    let schema = reflectgen_schema::parse_schema(json)?;
    reflectgen_schema::validate_schema(&schema)?;
    generate_serialization(&schema, config, scope_prefix)
}
