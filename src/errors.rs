// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for model mapping operations
//!
//! Two layers of failure exist:
//!
//! - [`MapperError`] is returned by operations that fail as a whole
//!   (unknown resource kind, bad configuration, a conversion pass that
//!   produced error diagnostics and was asked to abort).
//! - [`ConversionError`] describes a single field that could not be
//!   converted. It never aborts a pass on its own; the walkers turn it into
//!   an error [`Diagnostic`](crate::diagnostics::Diagnostic) at the field's
//!   attribute path and keep going.

use thiserror::Error;

/// Errors that can occur in mapping operations
#[derive(Debug, Error)]
pub enum MapperError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Resource kind name not in the catalog
    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    /// A conversion pass reported error diagnostics
    #[error("Conversion failed with {errors} error(s): {first}")]
    Conversion {
        /// Number of error diagnostics
        errors: usize,
        /// Rendering of the first error diagnostic
        first: String,
    },
}

/// Result type for mapping operations
pub type MapperResult<T> = Result<T, MapperError>;

impl From<serde_json::Error> for MapperError {
    fn from(err: serde_json::Error) -> Self {
        MapperError::Serialization(err.to_string())
    }
}

/// Failure to convert one field between the external record and the model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value does not have the shape the attribute declares
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A timestamp that cannot be parsed
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// A JSON-typed string attribute that does not hold JSON
    #[error("invalid JSON document: {0}")]
    InvalidJson(String),

    /// An integer that does not fit in int64
    #[error("integer {0} does not fit in int64")]
    IntegerOutOfRange(String),

    /// A float that JSON cannot represent (NaN or infinite)
    #[error("float {0} cannot be represented in a request")]
    NonFiniteFloat(String),

    /// The model holds an attribute the schema does not declare
    #[error("attribute {0:?} is not declared by the schema")]
    UnexpectedAttribute(String),

    /// The encoded request does not deserialize into the external record type
    #[error("request does not match the external record: {0}")]
    RequestShape(String),
}
