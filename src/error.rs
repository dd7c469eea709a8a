//! Custom error types for matreq
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for matreq operations
#[derive(Error, Debug)]
pub enum MatreqError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed input rejected at a schema boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A uniqueness check found an existing identifier
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The stored request moved on since the caller last read it
    #[error("Version conflict: expected version {expected}, stored version is {actual}")]
    Conflict { expected: u64, actual: u64 },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MatreqError {
    /// Create a "not found" error for requests
    pub fn request_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Request",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for hierarchy nodes
    pub fn hierarchy_node_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Hierarchy node",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for an already assigned master code
    pub fn duplicate_master_code(code: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Master code",
            identifier: code.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for MatreqError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MatreqError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for MatreqError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for matreq operations
pub type MatreqResult<T> = Result<T, MatreqError>;
