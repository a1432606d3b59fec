//! # geocr-umm — UMM-G to GeoCroissant Transform
//!
//! The pure core of the converter. Takes a parsed UMM-G document (a bare
//! granule body, a CMR `{meta, umm}` record, or a CMR search response) and
//! returns a GeoCroissant JSON-LD tree.
//!
//! ```text
//! source::resolve_granule ─┬─ spatial ──────┐
//!                          ├─ temporal ─────┤
//!                          ├─ platform ─────┼─ assemble ─> Dataset ─> Value
//!                          ├─ distribution ─┤
//!                          └─ citation ─────┘
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Structural errors are fatal, field gaps are not.** Only a non-object
//!    input or an empty CMR envelope fails a conversion. The granule model
//!    in [`model`] is lenient: missing or mistyped members become `None`.
//!
//! 2. **Extractors are independent.** Each reads the [`Granule`] record and
//!    returns an owned optional result; none depends on another.
//!
//! 3. **No I/O.** Retrieval and persistence live in `geocr-fetch`.
//!
//! ## Crate Policy
//!
//! - Depends only on `geocr-core` within the workspace.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod assemble;
pub mod citation;
pub mod convert;
pub mod distribution;
pub mod model;
pub mod platform;
pub mod source;
pub mod spatial;
pub mod temporal;

pub use convert::Converter;
pub use model::Granule;
pub use source::{resolve_granule, GranuleRecord};

use geocr_core::ConvertError;
use serde_json::Value;

/// Convert a parsed UMM-G document to GeoCroissant with placeholder checksums.
///
/// # Errors
///
/// [`ConvertError::InputType`] for a non-object input and
/// [`ConvertError::NoResults`] for a CMR response without granules.
pub fn umm_g_to_geocroissant(document: &Value) -> Result<Value, ConvertError> {
    Converter::default().convert(document)
}
