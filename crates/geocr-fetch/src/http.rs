//! HTTP retrieval of UMM-G documents.
//!
//! One `GET` per document with the configured timeout. Retries are NOT built
//! in; a failed fetch surfaces immediately as [`FetchError::Retrieval`].
//! CMR search responses are returned as-is; unwrapping the `items` envelope
//! is the transform's job.

use serde_json::Value;
use url::Url;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// HTTP client for UMM-G endpoints.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from configuration.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("geocr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::retrieval("<client>", e))?;
        Ok(Self { client })
    }

    /// Fetch and parse the JSON document at `url`.
    ///
    /// Transport failures, timeouts and non-2xx statuses map to
    /// [`FetchError::Retrieval`]; an unparseable body maps to
    /// [`FetchError::InvalidJson`].
    pub async fn fetch(&self, url: &Url) -> Result<Value, FetchError> {
        let location = url.as_str();
        tracing::info!(location, "fetching UMM-G document");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::retrieval(location, e))?
            .error_for_status()
            .map_err(|e| FetchError::retrieval(location, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::retrieval(location, e))?;

        let document = serde_json::from_slice(&body).map_err(|source| FetchError::InvalidJson {
            location: location.to_owned(),
            source,
        })?;

        tracing::info!(location, bytes = body.len(), "fetched UMM-G document");
        Ok(document)
    }
}
