//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use reflectgen::prelude::*;
//! ```

// Schema types
pub use reflectgen_schema::{
    ClassDescriptor, ClassFlags, MemberDescriptor, ParseError, Schema, SchemaError,
    parse_schema, validate_schema,
};

// Codegen types
pub use reflectgen_codegen::{
    AncestryResolver, ClassFacts, CodegenError, DispatchGenerator, HierarchyConfig,
    SerializationGenerator, generate_dispatch, generate_from_json, generate_serialization,
};
