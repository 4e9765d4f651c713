//! Collaborator interfaces supplied by the front end.
//!
//! The codec never talks to a terminal or a window. Whatever hosts it
//! implements these traits; returning `None` means the human dismissed the
//! prompt, and the operation is abandoned rather than continued with an
//! empty value.

/// Source of passwords for sealing and opening notes.
pub trait PasswordSource {
    /// Ask for a password, or `None` if the user cancelled.
    fn request_password(&self, prompt: &str) -> Option<String>;

    /// Ask for the password a note is about to be sealed with.
    ///
    /// Sources that can re-prompt should ask for confirmation here.
    fn request_new_password(&self, prompt: &str) -> Option<String> {
        self.request_password(prompt)
    }
}

/// Source of free-form text such as a new document's name.
pub trait TextSource {
    /// Ask for text pre-filled with `default`, or `None` if the user cancelled.
    fn request_text(&self, prompt: &str, default: &str) -> Option<String>;
}

impl<F> PasswordSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn request_password(&self, prompt: &str) -> Option<String> {
        self(prompt)
    }
}
