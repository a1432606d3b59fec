//! # geocr-core — GeoCroissant Vocabulary and Scalar Encoders
//!
//! This crate is the leaf of the converter workspace. It owns everything
//! about the *output* side of a UMM-G to GeoCroissant conversion that does not
//! depend on how the source granule is shaped:
//!
//! - the fixed JSON-LD `@context` and the literal vocabulary strings,
//! - the typed GeoCroissant [`Dataset`] document and its nested blocks,
//! - the scalar normalizers ([`sanitize_name`], [`normalize_version`]),
//! - the WKT polygon encoder ([`to_wkt`]),
//! - the file encoding-format classifier ([`encoding_format`]),
//! - the pluggable checksum capability ([`ChecksumProvider`]).
//!
//! ## Key Design Principles
//!
//! 1. **The context is a constant.** [`geocroissant_context()`] is built once
//!    per process and never mutated. Downstream validators key off the exact
//!    term IRIs, so nothing in the workspace assembles its own context.
//!
//! 2. **Absence is typed.** Optional output blocks are `Option` fields with
//!    `skip_serializing_if`, so "absent" and "null" can never be confused in
//!    the serialized document.
//!
//! 3. **Every encoder is total.** Sanitizing, version normalization, WKT
//!    encoding and media-type classification accept any input and never fail.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `geocr-*` crates.
//! - No I/O.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod context;
pub mod document;
pub mod error;
pub mod media_type;
pub mod name;
pub mod version;
pub mod wkt;

pub use checksum::{ChecksumProvider, PlaceholderChecksums};
pub use context::geocroissant_context;
pub use document::{CollectionSummary, DataGranuleSummary, Dataset, FileObject, TemporalCoverage};
pub use error::ConvertError;
pub use media_type::encoding_format;
pub use name::sanitize_name;
pub use version::normalize_version;
pub use wkt::{to_wkt, Coordinate};
