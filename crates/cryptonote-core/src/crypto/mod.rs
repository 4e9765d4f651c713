//! Cryptographic primitives for CryptoNote.
//!
//! ## Security Model
//!
//! - Key = SHA-256(password), no salt, no stretching
//! - AES-256-CBC with PKCS#7 padding, fresh random IV per encryption
//! - Key material zeroized from memory on drop
//! - Passwords are never stored or logged
//!
//! ## Threat Model
//!
//! We defend against:
//! - Casual reading of a sealed note file
//!
//! We do NOT defend against:
//! - Offline dictionary attacks (the key derivation is fast and unsalted)
//! - Undetected tampering (CBC carries no authentication tag)
//! - Compromised OS / keylogger

pub mod key;

pub use key::{derive_key, DerivedKey, KEY_LENGTH};

/// Length of the initialization vector in bytes (one AES block).
pub const IV_LENGTH: usize = 16;
