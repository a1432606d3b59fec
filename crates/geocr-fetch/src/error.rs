//! Retrieval and persistence errors.

use std::path::PathBuf;

use geocr_core::ConvertError;

/// Boxed transport error, independent of which HTTP stack produced it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from loading a source document, converting it, or saving the result.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The local source file does not exist.
    #[error("UMM-G file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading or writing a local file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A local source file is not valid JSON.
    #[error("invalid JSON in UMM-G file {}: {source}", path.display())]
    InvalidFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A fetched response body is not valid JSON.
    #[error("Invalid JSON response from URL {location}: {source}")]
    InvalidJson {
        location: String,
        source: serde_json::Error,
    },

    /// A location looked like a URL but could not be parsed as one.
    #[error("invalid URL {location}: {source}")]
    InvalidUrl {
        location: String,
        source: url::ParseError,
    },

    /// Network failure, timeout, or non-success status.
    #[error("Failed to fetch UMM-G data from URL {location}: {source}")]
    Retrieval { location: String, source: BoxError },

    /// A capability was requested that this build does not include.
    #[error("{capability} is not available in this build: {hint}")]
    MissingDependency {
        capability: &'static str,
        hint: &'static str,
    },

    /// The transform rejected the document.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[cfg(feature = "http")]
    pub(crate) fn retrieval(location: &str, source: impl Into<BoxError>) -> Self {
        Self::Retrieval {
            location: location.to_owned(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_location() {
        let err = FetchError::NotFound {
            path: PathBuf::from("/nonexistent/file.json"),
        };
        assert_eq!(err.to_string(), "UMM-G file not found: /nonexistent/file.json");

        let err = FetchError::Retrieval {
            location: "https://example.com/notfound.json".into(),
            source: "HTTP status client error (404 Not Found)".into(),
        };
        assert!(err
            .to_string()
            .starts_with("Failed to fetch UMM-G data from URL https://example.com/notfound.json"));
    }

    #[test]
    fn convert_errors_are_transparent() {
        let err = FetchError::from(ConvertError::NoResults);
        assert_eq!(err.to_string(), "CMR response contains no granules");
    }

    #[test]
    fn missing_dependency_message() {
        let err = FetchError::MissingDependency {
            capability: "remote retrieval",
            hint: "rebuild geocr-fetch with the `http` feature",
        };
        assert_eq!(
            err.to_string(),
            "remote retrieval is not available in this build: rebuild geocr-fetch with the `http` feature"
        );
    }
}
