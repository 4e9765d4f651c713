//! The note currently held by the editor.

use std::path::Path;

use crate::prompt::TextSource;

/// Name given to a document before it is first saved.
pub const DEFAULT_DOCUMENT_NAME: &str = "New file.txt";

/// Extension appended to document names that lack it.
pub const NOTE_EXTENSION: &str = ".txt";

/// The editor's working document: a display name and its text.
///
/// The document is passed into and returned from operations instead of living
/// in shared editor state; saving produces a document renamed after the file
/// it was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDocument {
    pub name: String,
    pub text: String,
}

impl EditorDocument {
    /// An empty document with the default name.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_DOCUMENT_NAME)
    }

    /// An empty document named `name`, with `.txt` appended if missing.
    pub fn with_name(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            text: String::new(),
        }
    }

    /// Start a new document, asking `source` for its name.
    ///
    /// A cancelled or blank answer keeps `default_name`.
    pub fn create(source: &dyn TextSource, default_name: &str) -> Self {
        match source.request_text("Name of the new file", default_name) {
            Some(name) if !name.trim().is_empty() => Self::with_name(name.trim()),
            _ => Self::with_name(default_name),
        }
    }

    /// Replace the text, keeping the name.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Rename after the base name of `path`; the name is taken as-is.
    pub fn renamed_after(mut self, path: &Path) -> Self {
        if let Some(file_name) = path.file_name() {
            self.name = file_name.to_string_lossy().into_owned();
        }
        self
    }
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_name(name: &str) -> String {
    if name.ends_with(NOTE_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, NOTE_EXTENSION)
    }
}
