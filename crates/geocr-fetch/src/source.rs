//! Where a source document comes from.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use url::Url;

use crate::error::FetchError;

/// Location of a UMM-G document, or the document itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// A local JSON file.
    Path(PathBuf),
    /// An HTTP(S) endpoint, e.g. a CMR `granules.umm_json` search.
    Url(Url),
    /// An already-parsed document.
    Document(Value),
}

impl DocumentSource {
    /// Classify a command-line location.
    ///
    /// `http://` and `https://` prefixes are URLs; anything else is a path.
    pub fn parse(location: &str) -> Result<Self, FetchError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let url = Url::parse(location).map_err(|source| FetchError::InvalidUrl {
                location: location.to_owned(),
                source,
            })?;
            return Ok(Self::Url(url));
        }
        Ok(Self::Path(PathBuf::from(location)))
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Url> for DocumentSource {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<Value> for DocumentSource {
    fn from(document: Value) -> Self {
        Self::Document(document)
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
            Self::Document(_) => f.write_str("<in-memory document>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_prefixes_are_urls() {
        let source = DocumentSource::parse(
            "https://cmr.earthdata.nasa.gov/search/granules.umm_json?concept_id=G2700719831-LPCLOUD",
        )
        .unwrap();
        assert!(matches!(source, DocumentSource::Url(ref u) if u.host_str() == Some("cmr.earthdata.nasa.gov")));
        assert!(matches!(
            DocumentSource::parse("http://localhost:8080/umm.json").unwrap(),
            DocumentSource::Url(_)
        ));
    }

    #[test]
    fn everything_else_is_a_path() {
        assert_eq!(
            DocumentSource::parse("data/umm.json").unwrap(),
            DocumentSource::Path(PathBuf::from("data/umm.json"))
        );
        assert!(matches!(
            DocumentSource::parse("ftp://example.com/umm.json").unwrap(),
            DocumentSource::Path(_)
        ));
        assert!(matches!(
            DocumentSource::parse("HTTPS-mirror/umm.json").unwrap(),
            DocumentSource::Path(_)
        ));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let err = DocumentSource::parse("http://").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn display_names_the_location() {
        assert_eq!(DocumentSource::parse("a/b.json").unwrap().to_string(), "a/b.json");
        assert_eq!(
            DocumentSource::from(serde_json::json!({})).to_string(),
            "<in-memory document>"
        );
    }
}
