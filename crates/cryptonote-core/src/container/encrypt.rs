//! Sealing notes into containers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use super::{Aes256CbcEnc, SealedFormat, BINARY_MARKER, TEXT_MARKER};
use crate::crypto::{derive_key, IV_LENGTH};

/// Encrypt `text` under `password` and frame it as `format`.
///
/// A fresh IV is drawn from the OS random number generator on every call,
/// so sealing the same note twice yields different containers. The empty
/// password is accepted.
///
/// # Examples
///
/// ```
/// use cryptonote_core::container::{decrypt, encrypt};
/// use cryptonote_core::SealedFormat;
///
/// let sealed = encrypt("hello world", "hunter2", SealedFormat::FormatB);
/// assert_eq!(decrypt(&sealed, "hunter2").unwrap(), "hello world");
/// ```
pub fn encrypt(text: &str, password: &str, format: SealedFormat) -> Vec<u8> {
    let key = derive_key(password);

    let mut iv = [0u8; IV_LENGTH];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(text.as_bytes());

    let mut payload = Vec::with_capacity(IV_LENGTH + ciphertext.len());
    payload.extend_from_slice(&iv);
    payload.extend_from_slice(&ciphertext);

    tracing::debug!(
        format = %format,
        plaintext_len = text.len(),
        ciphertext_len = ciphertext.len(),
        "sealed note"
    );

    match format {
        SealedFormat::FormatA => {
            let encoded = STANDARD.encode(&payload);
            let mut out = Vec::with_capacity(TEXT_MARKER.len() + 1 + encoded.len());
            out.extend_from_slice(TEXT_MARKER.as_bytes());
            out.push(b'\n');
            out.extend_from_slice(encoded.as_bytes());
            out
        }
        SealedFormat::FormatB => {
            let mut out = Vec::with_capacity(BINARY_MARKER.len() + payload.len());
            out.extend_from_slice(BINARY_MARKER);
            out.extend_from_slice(&payload);
            out
        }
    }
}
