//! Citation extractor.

use geocr_core::context::{DEFAULT_CITATION, DOI_RESOLVER};
use serde_json::Value;

use crate::model::{AdditionalAttribute, Granule};

/// Name of the additional attribute carrying the product DOI.
pub const PRODUCT_DOI_ATTRIBUTE: &str = "IDENTIFIER_PRODUCT_DOI";

/// Resolve the `citeAs` value.
///
/// Uses the first value of the first `IDENTIFIER_PRODUCT_DOI` attribute whose
/// value list starts with a non-empty string or a number, prefixed with the
/// DOI resolver. Falls back to [`DEFAULT_CITATION`].
pub fn extract_cite_as(granule: &Granule) -> String {
    granule
        .additional_attributes
        .iter()
        .filter_map(AdditionalAttribute::from_value)
        .filter(|attr| attr.name.as_deref() == Some(PRODUCT_DOI_ATTRIBUTE))
        .find_map(|attr| attr.values.first().and_then(doi_text))
        .map_or_else(
            || DEFAULT_CITATION.to_owned(),
            |doi| format!("{DOI_RESOLVER}{doi}"),
        )
}

fn doi_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
