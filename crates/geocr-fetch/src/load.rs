//! Resolve a [`DocumentSource`] to a parsed JSON tree.

use std::path::Path;

use serde_json::Value;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::source::DocumentSource;

/// Load the document behind `source`.
///
/// In-memory documents are returned unchanged. Local files are checked for
/// existence before they are read. URLs are fetched with the `http` feature
/// and fail with [`FetchError::MissingDependency`] without it.
pub async fn load_document(
    source: DocumentSource,
    config: &FetchConfig,
) -> Result<Value, FetchError> {
    match source {
        DocumentSource::Document(document) => Ok(document),
        DocumentSource::Path(path) => load_file(&path).await,
        DocumentSource::Url(url) => fetch_url(&url, config).await,
    }
}

/// Read and parse a local JSON file.
pub async fn load_file(path: &Path) -> Result<Value, FetchError> {
    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|e| FetchError::io(path, e))?;
    if !exists {
        return Err(FetchError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FetchError::io(path, e))?;
    let document = serde_json::from_str(&text).map_err(|source| FetchError::InvalidFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "loaded UMM-G document from file");
    Ok(document)
}

#[cfg(feature = "http")]
async fn fetch_url(url: &url::Url, config: &FetchConfig) -> Result<Value, FetchError> {
    crate::http::HttpFetcher::new(config)?.fetch(url).await
}

#[cfg(not(feature = "http"))]
async fn fetch_url(_url: &url::Url, _config: &FetchConfig) -> Result<Value, FetchError> {
    Err(FetchError::MissingDependency {
        capability: "remote retrieval",
        hint: "rebuild geocr-fetch with the `http` feature",
    })
}
