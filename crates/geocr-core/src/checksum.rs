//! # Checksum Capability
//!
//! Croissant validators require `md5` and `sha256` on every file object.
//! The converter never touches the referenced files, so checksums come from
//! a [`ChecksumProvider`]. The default, [`PlaceholderChecksums`], emits fixed
//! placeholder strings; deployments that can reach the files plug in a real
//! implementation.

/// Placeholder emitted for `md5` by [`PlaceholderChecksums`].
pub const PLACEHOLDER_MD5: &str = "placeholder_md5_hash";

/// Placeholder emitted for `sha256` by [`PlaceholderChecksums`].
pub const PLACEHOLDER_SHA256: &str = "placeholder_sha256_hash";

/// Source of file checksums for distribution entries.
///
/// Implementations must be pure with respect to the conversion: the same
/// `content_url` yields the same digests for the duration of a call.
pub trait ChecksumProvider: Send + Sync {
    /// Hex MD5 digest of the file at `content_url`.
    fn md5(&self, content_url: &str) -> String;

    /// Hex SHA-256 digest of the file at `content_url`.
    fn sha256(&self, content_url: &str) -> String;
}

/// Emits the fixed placeholder strings. Computes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderChecksums;

impl ChecksumProvider for PlaceholderChecksums {
    fn md5(&self, _content_url: &str) -> String {
        PLACEHOLDER_MD5.to_owned()
    }

    fn sha256(&self, _content_url: &str) -> String {
        PLACEHOLDER_SHA256.to_owned()
    }
}
