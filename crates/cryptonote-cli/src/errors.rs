//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;
use std::path::Path;

use cryptonote_core::{DecodeError, NoteError};

use crate::constants::{exit_codes, PASSWORD_ENV};

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Note file not found
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password, too many attempts)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Container bytes are damaged or not a container
    Corrupted(String),

    /// A prompt was dismissed or no password source was available
    Cancelled { hint: Option<String> },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::Corrupted(message) => write!(f, "{}", message),
            CliError::Cancelled { hint } => {
                if let Some(h) = hint {
                    write!(f, "Cancelled.\n{}", h)
                } else {
                    write!(f, "Cancelled.")
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a Cancelled error; non-interactive runs get a hint about the env var.
    pub fn cancelled(interactive: bool) -> Self {
        let hint = (!interactive).then(|| {
            format!(
                "Hint: No terminal is available for a password prompt. Set {}.",
                PASSWORD_ENV
            )
        });
        CliError::Cancelled { hint }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Translate a core error into a CLI error, if it has a dedicated exit code.
    ///
    /// `path` names the file the failed operation was working on.
    pub fn from_note_error(
        err: &NoteError,
        path: Option<&Path>,
        interactive: bool,
    ) -> Option<Self> {
        match err {
            NoteError::Decode(DecodeError::AuthenticationFailed) => Some(
                CliError::auth_failed_with_hint(
                    "Incorrect password or corrupted file.",
                    "Hint: Passwords are case-sensitive. A sealed note cannot be recovered without its password.",
                ),
            ),
            NoteError::Decode(DecodeError::MalformedEncoding) => Some(CliError::Corrupted(
                "File is corrupted (invalid Base64 payload).".to_string(),
            )),
            NoteError::Decode(DecodeError::Truncated) => Some(CliError::Corrupted(
                "File is corrupted (container is truncated).".to_string(),
            )),
            NoteError::Decode(DecodeError::UnknownFormat) => Some(CliError::Corrupted(
                "File is not a sealed CryptoNote container.".to_string(),
            )),
            NoteError::Cancelled => Some(CliError::cancelled(interactive)),
            NoteError::InvalidInput(message) => Some(CliError::invalid_input(message.clone())),
            NoteError::Io { source } if source.kind() == std::io::ErrorKind::NotFound => Some(
                CliError::not_found(
                    match path {
                        Some(path) => format!("File not found: {}", path.display()),
                        None => format!("File not found: {}", source),
                    },
                    "Hint: Check the path, or create a note with `cryptonote new`.",
                ),
            ),
            _ => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::Corrupted(_) => exit_codes::CORRUPTED,
            CliError::Cancelled { .. } => exit_codes::CANCELLED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

/// Convert a core error into an `anyhow::Error`, preferring a typed CLI error.
pub fn cli_error(err: NoteError, interactive: bool) -> anyhow::Error {
    note_error(err, None, interactive)
}

/// Like [`cli_error`], for an operation on `path`.
pub fn cli_error_at(err: NoteError, path: &Path, interactive: bool) -> anyhow::Error {
    note_error(err, Some(path), interactive)
}

fn note_error(err: NoteError, path: Option<&Path>, interactive: bool) -> anyhow::Error {
    match CliError::from_note_error(&err, path, interactive) {
        Some(mapped) => mapped.into(),
        None => err.into(),
    }
}
