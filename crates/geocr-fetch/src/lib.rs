//! # geocr-fetch — Retrieval and Persistence
//!
//! The I/O around the pure transform in `geocr-umm`: load a UMM-G document
//! from a local file, an HTTP(S) endpoint, or memory; convert it; optionally
//! write the GeoCroissant result to disk.
//!
//! ## Key Design Principles
//!
//! 1. **The transform stays pure.** Everything here happens before or after
//!    [`Converter::convert`]. CMR search responses are handed over unwrapped.
//!
//! 2. **No retries.** A failed fetch is reported once, with its location.
//!    Retry policy belongs to the caller.
//!
//! 3. **HTTP is optional.** The `http` feature (on by default) pulls in
//!    `reqwest`. Without it, URL sources fail fast with
//!    [`FetchError::MissingDependency`].

pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod load;
pub mod persist;
pub mod source;

pub use config::FetchConfig;
pub use error::FetchError;
#[cfg(feature = "http")]
pub use http::HttpFetcher;
pub use load::{load_document, load_file};
pub use persist::save_document;
pub use source::DocumentSource;

use std::path::Path;

use geocr_umm::Converter;
use serde_json::Value;

/// Load, convert and optionally save, with placeholder checksums.
pub async fn convert_source(
    source: DocumentSource,
    output: Option<&Path>,
    config: &FetchConfig,
) -> Result<Value, FetchError> {
    convert_source_with(&Converter::default(), source, output, config).await
}

/// Load, convert with `converter`, and optionally save to `output`.
pub async fn convert_source_with(
    converter: &Converter,
    source: DocumentSource,
    output: Option<&Path>,
    config: &FetchConfig,
) -> Result<Value, FetchError> {
    let document = load_document(source, config).await?;
    let converted = converter.convert(&document)?;
    if let Some(path) = output {
        save_document(&converted, path).await?;
    }
    Ok(converted)
}
