//! Configurable entry point for the transform.

use std::fmt;
use std::sync::Arc;

use geocr_core::{ChecksumProvider, ConvertError, Dataset, PlaceholderChecksums};
use serde_json::Value;

use crate::assemble::assemble;
use crate::source::resolve_granule;

/// UMM-G to GeoCroissant converter.
///
/// Holds the checksum capability used for distribution entries. Cheap to
/// clone and safe to share across threads; a conversion never mutates it.
#[derive(Clone)]
pub struct Converter {
    checksums: Arc<dyn ChecksumProvider>,
}

impl Converter {
    /// Converter that takes file checksums from `checksums`.
    pub fn new(checksums: impl ChecksumProvider + 'static) -> Self {
        Self {
            checksums: Arc::new(checksums),
        }
    }

    /// Convert a parsed source document into a typed [`Dataset`].
    pub fn convert_to_dataset(&self, document: &Value) -> Result<Dataset, ConvertError> {
        let record = resolve_granule(document)?;
        Ok(assemble(&record, self.checksums.as_ref()))
    }

    /// Convert a parsed source document into a GeoCroissant JSON-LD tree.
    pub fn convert(&self, document: &Value) -> Result<Value, ConvertError> {
        Ok(self.convert_to_dataset(document)?.to_value()?)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(PlaceholderChecksums)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedChecksums;

    impl ChecksumProvider for FixedChecksums {
        fn md5(&self, content_url: &str) -> String {
            format!("md5:{content_url}")
        }

        fn sha256(&self, content_url: &str) -> String {
            format!("sha256:{content_url}")
        }
    }

    #[test]
    fn custom_checksums_reach_distribution() {
        let converter = Converter::new(FixedChecksums);
        let out = converter
            .convert(&json!({"RelatedUrls": [{"URL": "https://x.com/a.tif"}]}))
            .unwrap();
        assert_eq!(out["distribution"][0]["md5"], "md5:https://x.com/a.tif");
        assert_eq!(out["distribution"][0]["sha256"], "sha256:https://x.com/a.tif");
    }

    #[test]
    fn default_uses_placeholders() {
        let out = Converter::default()
            .convert(&json!({"RelatedUrls": [{"URL": "a.tif"}]}))
            .unwrap();
        assert_eq!(out["distribution"][0]["md5"], "placeholder_md5_hash");
        assert_eq!(out["distribution"][0]["sha256"], "placeholder_sha256_hash");
    }

    #[test]
    fn structural_errors_propagate() {
        let err = Converter::default().convert(&json!({"items": []})).unwrap_err();
        assert!(matches!(err, ConvertError::NoResults));
    }

    #[test]
    fn converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
