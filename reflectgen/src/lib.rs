//! # reflectgen
//!
//! Schema-driven reflection code generator for engine class hierarchies.
//!
//! Given a snapshot of a single-inheritance class hierarchy (names, parent
//! links, typed members, per-member serializability), reflectgen emits the
//! C++ implementing Save/Restore, Clone/CopyValueTo, and a runtime-type
//! dispatch table consistent with that hierarchy.
//!
//! ## Quick Start
//!
//! ```ignore
//! use reflectgen::prelude::*;
//!
//! let schema = parse_schema(&snapshot_json)?;
//! validate_schema(&schema)?;
//!
//! let config = HierarchyConfig::new("engine::Object", "engine::Component");
//! let engine_unit = generate_serialization(&schema, &config, "engine")?;
//! let dispatch = generate_dispatch(&schema, &config, "engine")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Snapshot loading, descriptors, validation
//! - [`codegen`] - Ancestry resolution and C++ emission

pub mod prelude;

/// Snapshot loading and validation.
pub mod schema {
    pub use reflectgen_schema::*;
}

/// Code generation from class hierarchy schemas.
pub mod codegen {
    pub use reflectgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use reflectgen_codegen::{
    AncestryResolver, CodegenError, HierarchyConfig, generate_dispatch, generate_from_json,
    generate_serialization,
};
pub use reflectgen_schema::{Schema, parse_schema, validate_schema};
