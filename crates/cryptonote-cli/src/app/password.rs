//! Opening notes with password retry logic.

use std::path::Path;

use cryptonote_core::{classify, ContainerFormat, DecodeError, EditorDocument, NoteCodec, NoteError};

use crate::constants::MAX_PASSWORD_ATTEMPTS;
use crate::errors::{cli_error_at, CliError};
use crate::helpers::TerminalPrompts;

/// Open `path`, re-prompting after a wrong password when a human is typing.
///
/// The file is read once; the detected format is returned with the document.
/// Passwords from the environment, or runs without a terminal, get a single
/// attempt.
pub fn open_with_retry(
    codec: &NoteCodec,
    path: &Path,
    prompts: &TerminalPrompts,
) -> anyhow::Result<(EditorDocument, ContainerFormat)> {
    let bytes = std::fs::read(path)
        .map_err(|e| cli_error_at(NoteError::from(e), path, prompts.interactive()))?;
    let format = classify(&bytes);

    let max_attempts = if prompts.interactive() && !prompts.password_from_env() {
        MAX_PASSWORD_ATTEMPTS
    } else {
        1
    };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        match codec.open(&bytes, prompts) {
            Ok(text) => {
                let document = EditorDocument::new().with_text(text).renamed_after(path);
                return Ok((document, format));
            }
            Err(NoteError::Decode(DecodeError::AuthenticationFailed)) if attempts < max_attempts => {
                let remaining = max_attempts - attempts;
                eprintln!(
                    "Incorrect password. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
                continue;
            }
            Err(NoteError::Decode(DecodeError::AuthenticationFailed)) if attempts > 1 => {
                return Err(CliError::auth_failed_with_hint(
                    "Too many failed password attempts.",
                    "Hint: A sealed note cannot be recovered without its password.",
                )
                .into());
            }
            Err(err) => return Err(cli_error_at(err, path, prompts.interactive())),
        }
    }
}
