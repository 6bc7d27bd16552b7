//! # reflectgen Schema
//!
//! Class hierarchy snapshot loading and validation.
//!
//! This crate provides:
//! - Descriptors for classes, members, and capability flags
//! - JSON snapshot parsing into a deterministic, key-ordered store
//! - Structural validation (parent links, cycle detection)

pub mod classes;
pub mod error;
pub mod parser;
pub mod store;
pub mod validation;

pub use classes::{ClassDescriptor, ClassFlags, MemberDescriptor};
pub use error::{ParseError, SchemaError};
pub use parser::parse_schema;
pub use store::Schema;
pub use validation::validate_schema;
