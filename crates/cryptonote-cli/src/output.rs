//! JSON output formatting.

use std::path::Path;

use cryptonote_core::{ContainerFormat, EditorDocument};

/// Convert an opened document to JSON for output.
pub fn document_json(document: &EditorDocument, format: ContainerFormat) -> serde_json::Value {
    serde_json::json!({
        "name": document.name,
        "format": format.as_str(),
        "sealed": format.is_sealed(),
        "text": document.text,
    })
}

/// Convert a detection result to JSON for output.
pub fn detection_json(path: &Path, format: ContainerFormat, size: usize) -> serde_json::Value {
    serde_json::json!({
        "path": path.display().to_string(),
        "format": format.as_str(),
        "sealed": format.is_sealed(),
        "size": size,
    })
}
