//! # CryptoNote Core
//!
//! Core library for CryptoNote - a plain-text note editor that can seal notes
//! into password-protected containers.
//!
//! This crate provides the codec and document model independent of any
//! front end. The front end only has to supply a way to ask a human for a
//! password (and, for new documents, a name).
//!
//! ## Architecture
//!
//! - **crypto**: password to key derivation
//! - **container**: format detection, encryption and decryption of containers
//! - **codec**: `open`/`save` façade over detection and the cipher
//! - **document**: the editor's current note (name + text)
//! - **prompt**: collaborator traits for password and text input
//! - **fs**: atomic file writes

pub mod codec;
pub mod container;
pub mod crypto;
pub mod document;
pub mod error;
pub mod fs;
pub mod prompt;

pub use codec::{NoteCodec, SaveMode};
pub use container::{classify, ContainerFormat, SealedFormat};
pub use document::EditorDocument;
pub use error::{DecodeError, NoteError, Result};
pub use prompt::{PasswordSource, TextSource};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
