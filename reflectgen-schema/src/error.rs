//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema snapshot parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type for structural schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Class not found in the schema.
    #[error("class '{name}' not found")]
    ClassNotFound {
        /// Class name.
        name: String,
    },

    /// Declared parent missing from the schema.
    #[error("parent '{parent}' of class '{class}' not found")]
    ParentNotFound {
        /// Class declaring the parent.
        class: String,
        /// Missing parent name.
        parent: String,
    },

    /// Cycle in the parent relation.
    #[error("inheritance cycle detected: {path}")]
    InheritanceCycle {
        /// Chain of classes forming the cycle.
        path: String,
    },
}

impl SchemaError {
    /// Creates a class-not-found error.
    pub fn class_not_found(name: impl Into<String>) -> Self {
        Self::ClassNotFound { name: name.into() }
    }

    /// Creates a parent-not-found error.
    pub fn parent_not_found(class: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::ParentNotFound {
            class: class.into(),
            parent: parent.into(),
        }
    }

    /// Creates an inheritance-cycle error from the walked chain.
    pub fn cycle(path: impl Into<String>) -> Self {
        Self::InheritanceCycle { path: path.into() }
    }
}
