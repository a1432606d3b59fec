//! Write GeoCroissant documents to disk.

use std::path::Path;

use geocr_core::ConvertError;
use serde_json::Value;

use crate::error::FetchError;

/// Write `document` to `path` as 2-space-indented JSON with a trailing
/// newline, creating missing parent directories.
pub async fn save_document(document: &Value, path: &Path) -> Result<(), FetchError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| FetchError::io(parent, e))?;
    }

    let mut text = serde_json::to_string_pretty(document).map_err(ConvertError::from)?;
    text.push('\n');
    tokio::fs::write(path, text)
        .await
        .map_err(|e| FetchError::io(path, e))?;

    tracing::info!(path = %path.display(), "saved GeoCroissant document");
    Ok(())
}
