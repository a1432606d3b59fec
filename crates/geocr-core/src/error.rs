//! # Error Types
//!
//! Structural failures of a conversion. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Only the *shape* of the input can fail a conversion: a tree that is not a
//! mapping, or a CMR envelope without granules. Missing or malformed fields
//! inside a granule never surface here; extractors degrade them to omission
//! or documented defaults.

use serde_json::Value;
use thiserror::Error;

/// Error raised by the UMM-G to GeoCroissant transform.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input (or the selected granule record) is not a JSON object.
    #[error("expected a JSON object as UMM-G input, got {found}")]
    InputType {
        /// JSON kind that was found instead, e.g. `"array"`.
        found: &'static str,
    },

    /// A CMR search response was resolved but contained no granules.
    #[error("CMR response contains no granules")]
    NoResults,

    /// Serializing the assembled document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    /// Build an [`ConvertError::InputType`] naming the kind of `value`.
    pub fn input_type(value: &Value) -> Self {
        Self::InputType {
            found: json_kind(value),
        }
    }
}

/// Human-readable JSON kind of a value, used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
