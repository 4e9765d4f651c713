//! Error types for CryptoNote core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for CryptoNote operations.
pub type Result<T> = std::result::Result<T, NoteError>;

/// Failure to recover plaintext from a container.
///
/// `AuthenticationFailed` deliberately covers a wrong password, tampered
/// ciphertext and non-UTF-8 output alike: CBC without a tag cannot tell
/// these apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The text container's payload is not valid base64
    #[error("Container is corrupted (invalid Base64 payload)")]
    MalformedEncoding,

    /// Fewer than 16 bytes remain for the IV
    #[error("Container is truncated (missing initialization vector)")]
    Truncated,

    /// Wrong password or corrupted container
    #[error("Incorrect password or corrupted file")]
    AuthenticationFailed,

    /// Bytes carry neither container header
    #[error("Not an encrypted CryptoNote container")]
    UnknownFormat,
}

/// Core error type for CryptoNote operations.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Container could not be decrypted
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The user dismissed a password or text prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl NoteError {
    /// The decode failure behind this error, if any.
    pub fn decode_error(&self) -> Option<DecodeError> {
        match self {
            NoteError::Decode(err) => Some(*err),
            _ => None,
        }
    }
}
