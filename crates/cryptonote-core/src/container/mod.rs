//! Sealed note containers.
//!
//! Two container layouts exist:
//!
//! | Field  | Format A (text)                               | Format B (binary)        |
//! |--------|-----------------------------------------------|--------------------------|
//! | Header | `---CryptoNote Encrypted File (Base64)---\n`  | `CryptoNoteEncrypted`    |
//! | Body   | base64(IV ‖ ciphertext)                        | IV ‖ ciphertext          |
//!
//! Both use AES-256-CBC with PKCS#7 padding, a 16-byte random IV and the key
//! from [`crate::crypto::derive_key`]. Either can be written; both are always
//! readable.

pub mod decrypt;
pub mod encrypt;
pub mod format;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use format::{classify, ContainerFormat, SealedFormat};

/// Header line of a Format A (base64 text) container.
pub const TEXT_MARKER: &str = "---CryptoNote Encrypted File (Base64)---";

/// Header prefix of a Format B (raw binary) container.
pub const BINARY_MARKER: &[u8] = b"CryptoNoteEncrypted";

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
