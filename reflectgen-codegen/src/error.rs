//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] reflectgen_schema::ParseError),

    /// Schema structure error.
    #[error("schema error: {0}")]
    Schema(#[from] reflectgen_schema::SchemaError),
}
