//! Container format detection.

use std::fmt;
use std::str::FromStr;

use super::{BINARY_MARKER, TEXT_MARKER};
use crate::crypto::IV_LENGTH;
use crate::error::NoteError;

/// Classification of raw file bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// No recognized header; the bytes are the note itself
    Plaintext,
    /// Base64 text container
    FormatA,
    /// Raw binary container
    FormatB,
}

/// A container format that actually holds ciphertext.
///
/// The encryptor only accepts this type, so asking it to "encrypt" into
/// plaintext cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SealedFormat {
    /// Base64 text container (what earlier editor versions wrote)
    #[default]
    FormatA,
    /// Raw binary container
    FormatB,
}

impl ContainerFormat {
    /// Whether the bytes need a password to read.
    pub fn is_sealed(self) -> bool {
        self.sealed().is_some()
    }

    /// The sealed variant, or `None` for plaintext.
    pub fn sealed(self) -> Option<SealedFormat> {
        match self {
            ContainerFormat::Plaintext => None,
            ContainerFormat::FormatA => Some(SealedFormat::FormatA),
            ContainerFormat::FormatB => Some(SealedFormat::FormatB),
        }
    }

    /// Stable name used in CLI and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerFormat::Plaintext => "plaintext",
            ContainerFormat::FormatA => "text-container",
            ContainerFormat::FormatB => "binary-container",
        }
    }
}

impl From<SealedFormat> for ContainerFormat {
    fn from(format: SealedFormat) -> Self {
        match format {
            SealedFormat::FormatA => ContainerFormat::FormatA,
            SealedFormat::FormatB => ContainerFormat::FormatB,
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SealedFormat {
    /// Configuration name of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            SealedFormat::FormatA => "text",
            SealedFormat::FormatB => "binary",
        }
    }
}

impl fmt::Display for SealedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SealedFormat {
    type Err = NoteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "a" | "base64" => Ok(SealedFormat::FormatA),
            "binary" | "b" | "raw" => Ok(SealedFormat::FormatB),
            other => Err(NoteError::InvalidInput(format!(
                "Unsupported container format: {} (use text or binary)",
                other
            ))),
        }
    }
}

/// Classify raw file bytes by their header.
///
/// This is a pure prefix test: no password is needed and no decryption is
/// attempted. A plain note that happens to begin with a header is classified
/// as that container.
///
/// # Examples
///
/// ```
/// use cryptonote_core::{classify, ContainerFormat};
///
/// assert_eq!(classify(b"shopping list"), ContainerFormat::Plaintext);
/// ```
pub fn classify(bytes: &[u8]) -> ContainerFormat {
    if bytes.len() >= BINARY_MARKER.len() + IV_LENGTH && bytes.starts_with(BINARY_MARKER) {
        ContainerFormat::FormatB
    } else if bytes.starts_with(TEXT_MARKER.as_bytes()) {
        ContainerFormat::FormatA
    } else {
        ContainerFormat::Plaintext
    }
}
