//! # Name Sanitizer
//!
//! Turns an arbitrary dataset title into an identifier-safe slug.

/// Returned when the input is absent or sanitizes to nothing.
pub const UNNAMED_DATASET: &str = "UnnamedDataset";

/// Sanitize a title for use as a Croissant `name`.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `-`, runs of `-` collapse
/// into one, and leading/trailing `-` are trimmed. Case is preserved.
/// Absent, empty and all-separator inputs yield [`UNNAMED_DATASET`].
pub fn sanitize_name(name: Option<&str>) -> String {
    let Some(name) = name else {
        return UNNAMED_DATASET.to_owned();
    };

    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        let ch = if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            ch
        } else {
            '-'
        };
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }

    let trimmed = slug.trim_matches(|c: char| c == '-' || c == ' ');
    if trimmed.is_empty() {
        UNNAMED_DATASET.to_owned()
    } else {
        trimmed.to_owned()
    }
}
