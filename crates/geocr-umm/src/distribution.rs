//! Distribution extractor: one `cr:FileObject` per `RelatedUrls` entry.

use geocr_core::document::FileObject;
use geocr_core::{encoding_format, ChecksumProvider};

use crate::model::{present, Granule, RelatedUrl};

/// File name used when a URL has no final path segment.
pub const FALLBACK_FILE_NAME: &str = "data_file";

/// Build the distribution list in `RelatedUrls` order.
///
/// Identifiers are `distribution_<index>` starting at 0. Checksums come from
/// `checksums` and are never computed here.
pub fn extract_distributions(
    granule: &Granule,
    checksums: &dyn ChecksumProvider,
) -> Vec<FileObject> {
    granule
        .related_urls
        .iter()
        .enumerate()
        .map(|(index, related)| file_object(index, related, checksums))
        .collect()
}

fn file_object(index: usize, related: &RelatedUrl, checksums: &dyn ChecksumProvider) -> FileObject {
    let url = related.url.as_deref().unwrap_or_default();
    let url_type = related.url_type.as_deref();

    let description = match present(&related.description) {
        Some(description) => description.to_owned(),
        None => format!("Data file from {}", url_type.unwrap_or_default()),
    };

    FileObject {
        object_type: geocr_core::context::FILE_OBJECT_TYPE,
        id: format!("distribution_{index}"),
        name: file_name(url).to_owned(),
        description,
        content_url: url.to_owned(),
        encoding_format: encoding_format(url, url_type, related.subtype.as_deref()).to_owned(),
        md5: checksums.md5(url),
        sha256: checksums.sha256(url),
    }
}

/// Last `/`-separated segment of `url`, or [`FALLBACK_FILE_NAME`].
pub fn file_name(url: &str) -> &str {
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => FALLBACK_FILE_NAME,
    }
}
