//! Opening sealed containers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};
use zeroize::Zeroizing;

use super::{Aes256CbcDec, SealedFormat, BINARY_MARKER, TEXT_MARKER};
use crate::crypto::{derive_key, IV_LENGTH};
use crate::error::DecodeError;

/// Decrypt a container produced by [`super::encrypt`] or an earlier editor.
///
/// The header is matched by prefix only, so a binary container too short to
/// pass [`super::classify`] still reports [`DecodeError::Truncated`] here.
///
/// # Errors
///
/// - [`DecodeError::UnknownFormat`] if neither header is present
/// - [`DecodeError::MalformedEncoding`] if a text container's body is not base64
/// - [`DecodeError::Truncated`] if fewer than 16 bytes remain for the IV
/// - [`DecodeError::AuthenticationFailed`] for a wrong password, tampered
///   ciphertext or non-UTF-8 output
pub fn decrypt(bytes: &[u8], password: &str) -> Result<String, DecodeError> {
    let (format, body) = strip_marker(bytes).ok_or(DecodeError::UnknownFormat)?;

    match format {
        SealedFormat::FormatA => {
            let payload = decode_text_body(body)?;
            decrypt_payload(&payload, password)
        }
        SealedFormat::FormatB => decrypt_payload(body, password),
    }
}

fn strip_marker(bytes: &[u8]) -> Option<(SealedFormat, &[u8])> {
    if let Some(body) = bytes.strip_prefix(BINARY_MARKER) {
        Some((SealedFormat::FormatB, body))
    } else {
        bytes
            .strip_prefix(TEXT_MARKER.as_bytes())
            .map(|body| (SealedFormat::FormatA, body))
    }
}

fn decode_text_body(body: &[u8]) -> Result<Zeroizing<Vec<u8>>, DecodeError> {
    STANDARD
        .decode(body.trim_ascii())
        .map(Zeroizing::new)
        .map_err(|err| {
            tracing::debug!(error = %err, "text container body is not base64");
            DecodeError::MalformedEncoding
        })
}

fn decrypt_payload(payload: &[u8], password: &str) -> Result<String, DecodeError> {
    if payload.len() < IV_LENGTH {
        tracing::debug!(payload_len = payload.len(), "container too short for IV");
        return Err(DecodeError::Truncated);
    }
    let (iv, ciphertext) = payload.split_at(IV_LENGTH);

    let key = derive_key(password);
    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|_| DecodeError::AuthenticationFailed)?;

    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| {
            tracing::debug!(
                ciphertext_len = ciphertext.len(),
                "padding check failed after decryption"
            );
            DecodeError::AuthenticationFailed
        })?;

    let text = std::str::from_utf8(&plaintext)
        .map_err(|_| {
            tracing::debug!("decrypted bytes are not UTF-8");
            DecodeError::AuthenticationFailed
        })?
        .to_owned();

    tracing::debug!(plaintext_len = text.len(), "opened container");
    Ok(text)
}
