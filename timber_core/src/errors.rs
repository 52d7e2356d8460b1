//! # Error Types
//!
//! Structured error types for timber_core. Only configuration problems are
//! errors: a grade missing shear or bearing data is not an error, it produces a
//! failed "manual check required" [`CheckResult`](crate::calculations::CheckResult)
//! instead.
//!
//! ## Example
//!
//! ```rust
//! use timber_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "span_m".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for timber_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
///
/// Each variant is a distinct configuration failure so callers can present an
/// actionable message rather than a generic one.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Grade name not present in the grade table
    #[error("Unknown grade '{material_name}'. Available: {available}")]
    MaterialNotFound {
        material_name: String,
        available: String,
    },

    /// Overhang geometry leaves no back span between the supports
    #[error("Invalid geometry: total span {total_span_m} m, overhang {cantilever_m} m - {reason}")]
    InvalidGeometry {
        total_span_m: f64,
        cantilever_m: f64,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>, available: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
            available: available.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(total_span_m: f64, cantilever_m: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            total_span_m,
            cantilever_m,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
