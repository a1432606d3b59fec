//! # Version Normalizer
//!
//! Coerces free-form version strings to a dotted three-component form.
//! No numeric validation is performed: `"alpha-1.0"` becomes `"alpha-1.0.0"`.

/// Returned for absent or empty versions.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Normalize a version to exactly three dot-separated segments.
///
/// A leading lowercase `v` is stripped; an uppercase `V` is kept. Missing
/// segments are padded with `"0"`, extra segments are dropped. Numeric
/// versions must be stringified by the caller with their JSON formatting
/// (`2.5` as `"2.5"`).
pub fn normalize_version(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return DEFAULT_VERSION.to_owned(),
    };
    let raw = raw.strip_prefix('v').unwrap_or(raw);

    let mut parts: Vec<&str> = raw.split('.').collect();
    parts.resize(3, "0");
    parts.join(".")
}
