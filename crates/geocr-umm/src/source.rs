//! # Input Normalizer
//!
//! Resolves a parsed source document to a single [`GranuleRecord`].
//!
//! Three shapes are accepted:
//!
//! - a CMR search response `{"items": [record, ...]}`, whose first item is
//!   resolved recursively,
//! - a CMR granule record `{"meta": {...}, "umm": {...}}`,
//! - a bare UMM-G body, treated as `umm` with no `meta`.
//!
//! Only structural selection happens here. Unknown keys are ignored.

use geocr_core::ConvertError;
use serde::Deserialize;
use serde_json::Value;

use crate::model::{Granule, SourceMeta};

/// A resolved granule and the CMR provenance that came with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GranuleRecord {
    pub meta: SourceMeta,
    pub granule: Granule,
}

/// Resolve `document` to a single granule record.
///
/// # Errors
///
/// - [`ConvertError::InputType`] when the document (or the selected item,
///   or its `umm` member) is not a JSON object.
/// - [`ConvertError::NoResults`] when an `items` member is present but is
///   not a non-empty sequence.
pub fn resolve_granule(document: &Value) -> Result<GranuleRecord, ConvertError> {
    let record = document
        .as_object()
        .ok_or_else(|| ConvertError::input_type(document))?;

    if let Some(items) = record.get("items") {
        let first = items
            .as_array()
            .and_then(|items| items.first())
            .ok_or(ConvertError::NoResults)?;
        tracing::info!("detected CMR response format, using first granule");
        return resolve_granule(first);
    }

    let meta = match record.get("meta") {
        Some(meta @ Value::Object(_)) => SourceMeta::deserialize(meta)?,
        _ => SourceMeta::default(),
    };

    let body = match record.get("umm") {
        Some(umm @ Value::Object(_)) => umm,
        Some(other) => return Err(ConvertError::input_type(other)),
        None => document,
    };

    Ok(GranuleRecord {
        meta,
        granule: Granule::deserialize(body)?,
    })
}
