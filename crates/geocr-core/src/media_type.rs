//! # Encoding-Format Classifier
//!
//! Maps a file URL to the MIME type recorded as a distribution's
//! `encodingFormat`. Matching is a case-sensitive suffix test against the
//! whole URL string; the first matching row of [`SUFFIXES`] wins.

/// Fallback for URLs with no recognized extension.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Suffix table, checked in order.
pub const SUFFIXES: &[(&[&str], &str)] = &[
    (&[".tif", ".tiff"], "image/tiff"),
    (&[".jpg", ".jpeg"], "image/jpeg"),
    (&[".json"], "application/json"),
    (&[".xml"], "application/xml"),
    (&[".hdf", ".h5"], "application/x-hdf"),
    (&[".nc"], "application/x-netcdf"),
    (&[".zip"], "application/zip"),
];

/// Classify the encoding format of the file at `url`.
///
/// The UMM-G `Type` and `Subtype` of the related URL are accepted so callers
/// can pass everything they know, but classification currently uses the URL
/// alone. Total: every input yields exactly one MIME type.
pub fn encoding_format(url: &str, _url_type: Option<&str>, _subtype: Option<&str>) -> &'static str {
    SUFFIXES
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|s| url.ends_with(s)))
        .map_or(OCTET_STREAM, |&(_, mime)| mime)
}
