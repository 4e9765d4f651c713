//! Open/save façade used by front ends.
//!
//! `NoteCodec` ties format detection, the password prompt and the container
//! cipher together. Every call is a one-shot transform; the codec itself only
//! remembers which container format it writes.

use std::path::{Path, PathBuf};

use crate::container::{self, classify, ContainerFormat, SealedFormat};
use crate::document::EditorDocument;
use crate::error::{NoteError, Result};
use crate::fs::write_atomic;
use crate::prompt::PasswordSource;

/// Prompt shown when a sealed file is opened.
pub const OPEN_PROMPT: &str = "Enter the password to open the file";

/// Prompt shown when a note is about to be sealed.
pub const SEAL_PROMPT: &str = "Enter the password to encrypt the file";

/// How a note is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Raw UTF-8 text
    Plain,
    /// Sealed in the codec's container format
    Encrypted,
}

/// Reads any known container, writes one canonical format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteCodec {
    format: SealedFormat,
}

impl NoteCodec {
    /// Codec that seals notes as `format`.
    pub fn new(format: SealedFormat) -> Self {
        Self { format }
    }

    /// The format this codec writes.
    pub fn format(&self) -> SealedFormat {
        self.format
    }

    /// Recover note text from file bytes.
    ///
    /// Plaintext is returned as-is and the password source is never
    /// consulted. Sealed bytes require a password; a cancelled prompt aborts
    /// with [`NoteError::Cancelled`].
    pub fn open(&self, bytes: &[u8], passwords: &dyn PasswordSource) -> Result<String> {
        let format = classify(bytes);
        tracing::debug!(format = %format, len = bytes.len(), "classified input");

        if format == ContainerFormat::Plaintext {
            return Ok(String::from_utf8_lossy(bytes).into_owned());
        }

        let password = passwords
            .request_password(OPEN_PROMPT)
            .ok_or(NoteError::Cancelled)?;
        Ok(container::decrypt(bytes, &password)?)
    }

    /// Produce file bytes for `text`.
    ///
    /// Without a password source the raw UTF-8 bytes are returned. With one,
    /// a password is requested and the note is sealed in the codec's format.
    pub fn save(&self, text: &str, passwords: Option<&dyn PasswordSource>) -> Result<Vec<u8>> {
        let Some(passwords) = passwords else {
            return Ok(text.as_bytes().to_vec());
        };

        let password = passwords
            .request_new_password(SEAL_PROMPT)
            .ok_or(NoteError::Cancelled)?;
        Ok(container::encrypt(text, &password, self.format))
    }

    /// Read `path` into a document named after the file.
    pub fn open_file(&self, path: &Path, passwords: &dyn PasswordSource) -> Result<EditorDocument> {
        let bytes = std::fs::read(path)?;
        let text = self.open(&bytes, passwords)?;
        Ok(EditorDocument::new().with_text(text).renamed_after(path))
    }

    /// Write `document` to `path` and return it renamed after the file.
    ///
    /// The password is requested before anything touches the disk, so a
    /// cancelled prompt leaves an existing file intact.
    pub fn save_file(
        &self,
        document: EditorDocument,
        path: &Path,
        mode: SaveMode,
        passwords: &dyn PasswordSource,
    ) -> Result<EditorDocument> {
        let bytes = match mode {
            SaveMode::Plain => self.save(&document.text, None)?,
            SaveMode::Encrypted => self.save(&document.text, Some(passwords))?,
        };
        write_atomic(path, &bytes)?;
        tracing::info!(path = %path.display(), mode = ?mode, "saved note");
        Ok(document.renamed_after(path))
    }

    /// Write `text` to `file_name` in the system temp directory for sharing.
    ///
    /// The returned path is meant to be attached to a chat or mail by hand.
    pub fn export_for_sharing(
        &self,
        text: &str,
        file_name: &str,
        mode: SaveMode,
        passwords: &dyn PasswordSource,
    ) -> Result<PathBuf> {
        if file_name.trim().is_empty() || Path::new(file_name).components().count() != 1 {
            return Err(NoteError::InvalidInput(format!(
                "Share file name must be a plain file name: {:?}",
                file_name
            )));
        }
        let path = std::env::temp_dir().join(file_name);
        let document = EditorDocument::new().with_text(text);
        self.save_file(document, &path, mode, passwords)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use std::cell::Cell;

    fn password(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |_: &str| Some(value.to_string())
    }

    fn cancelled(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_plaintext_open_skips_password() {
        let asked = Cell::new(false);
        let source = |_: &str| -> Option<String> {
            asked.set(true);
            None
        };

        let text = NoteCodec::default().open(b"plain note", &source).unwrap();

        assert_eq!(text, "plain note");
        assert!(!asked.get());
    }

    #[test]
    fn test_save_without_source_is_raw() {
        let bytes = NoteCodec::default().save("raw text", None).unwrap();
        assert_eq!(bytes, b"raw text");
    }

    #[test]
    fn test_save_uses_canonical_format() {
        let source = password("pw");
        for format in [SealedFormat::FormatA, SealedFormat::FormatB] {
            let codec = NoteCodec::new(format);
            let bytes = codec.save("note", Some(&source)).unwrap();
            assert_eq!(classify(&bytes), ContainerFormat::from(format));
        }
    }

    #[test]
    fn test_open_reads_either_format() {
        let source = password("pw");
        let writer_a = NoteCodec::new(SealedFormat::FormatA);
        let reader_b = NoteCodec::new(SealedFormat::FormatB);

        let bytes = writer_a.save("legacy note", Some(&source)).unwrap();
        assert_eq!(reader_b.open(&bytes, &source).unwrap(), "legacy note");
    }

    #[test]
    fn test_cancelled_prompt_aborts() {
        let codec = NoteCodec::default();
        assert!(matches!(
            codec.save("note", Some(&cancelled)),
            Err(NoteError::Cancelled)
        ));

        let sealed = codec.save("note", Some(&password("pw"))).unwrap();
        assert!(matches!(
            codec.open(&sealed, &cancelled),
            Err(NoteError::Cancelled)
        ));
    }

    #[test]
    fn test_wrong_password_surfaces_decode_error() {
        let codec = NoteCodec::default();
        let sealed = codec.save("note", Some(&password("right"))).unwrap();

        let err = codec.open(&sealed, &password("wrong")).unwrap_err();
        assert_eq!(err.decode_error(), Some(DecodeError::AuthenticationFailed));
    }

    #[test]
    fn test_empty_password_is_not_cancellation() {
        let codec = NoteCodec::default();
        let sealed = codec.save("note", Some(&password(""))).unwrap();
        assert_eq!(codec.open(&sealed, &password("")).unwrap(), "note");
    }

    #[test]
    fn test_share_name_must_be_plain() {
        let codec = NoteCodec::default();
        let result = codec.export_for_sharing("x", "../escape.txt", SaveMode::Plain, &cancelled);
        assert!(matches!(result, Err(NoteError::InvalidInput(_))));
    }

    struct RecordingSource {
        opened: Cell<u32>,
        sealed: Cell<u32>,
    }

    impl PasswordSource for RecordingSource {
        fn request_password(&self, _: &str) -> Option<String> {
            self.opened.set(self.opened.get() + 1);
            Some("pw".to_string())
        }

        fn request_new_password(&self, _: &str) -> Option<String> {
            self.sealed.set(self.sealed.get() + 1);
            Some("pw".to_string())
        }
    }

    #[test]
    fn test_sealing_asks_for_new_password() {
        let source = RecordingSource {
            opened: Cell::new(0),
            sealed: Cell::new(0),
        };
        let codec = NoteCodec::default();

        let bytes = codec.save("note", Some(&source)).unwrap();
        assert_eq!((source.opened.get(), source.sealed.get()), (0, 1));

        assert_eq!(codec.open(&bytes, &source).unwrap(), "note");
        assert_eq!((source.opened.get(), source.sealed.get()), (1, 1));
    }
}
