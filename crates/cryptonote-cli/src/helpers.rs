//! Input helpers for the CLI.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use dialoguer::{Input, Password};

use cryptonote_core::{PasswordSource, TextSource};

use crate::constants::PASSWORD_ENV;

/// Password and text prompts backed by the terminal.
///
/// A non-empty `CRYPTONOTE_PASSWORD` always wins over prompting. Without it,
/// prompts are only shown when `interactive` is set; otherwise every request
/// reports cancellation. Password prompts talk to the terminal directly, so
/// piped stdin does not block them.
pub struct TerminalPrompts {
    interactive: bool,
}

impl TerminalPrompts {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// Whether passwords come from the environment rather than a prompt.
    pub fn password_from_env(&self) -> bool {
        env_password().is_some()
    }

    fn prompt_password(&self, prompt: &str, confirm: bool) -> Option<String> {
        if let Some(value) = env_password() {
            tracing::debug!("using password from {}", PASSWORD_ENV);
            return Some(value);
        }
        if !self.interactive {
            tracing::debug!("no terminal for password prompt");
            return None;
        }

        let mut password = Password::new().with_prompt(prompt);
        if confirm {
            password = password.with_confirmation("Confirm password", "Passwords do not match");
        }
        match password.interact() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(error = %err, "password prompt aborted");
                None
            }
        }
    }
}

impl PasswordSource for TerminalPrompts {
    fn request_password(&self, prompt: &str) -> Option<String> {
        self.prompt_password(prompt, false)
    }

    fn request_new_password(&self, prompt: &str) -> Option<String> {
        self.prompt_password(prompt, true)
    }
}

impl TextSource for TerminalPrompts {
    fn request_text(&self, prompt: &str, default: &str) -> Option<String> {
        // Piped stdin carries the note text, not the answer.
        if !self.interactive || !io::stdin().is_terminal() {
            return None;
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .ok()
    }
}

/// Whether prompts may be shown for this invocation.
///
/// dialoguer draws on stderr and reads from the terminal, so stdin may be a
/// pipe.
pub fn is_interactive(no_input: bool) -> bool {
    prompts_allowed(io::stderr().is_terminal(), no_input)
}

fn prompts_allowed(stderr_is_terminal: bool, no_input: bool) -> bool {
    stderr_is_terminal && !no_input
}

/// Read note text from `input`, or from stdin when it is not a terminal.
///
/// Returns an empty string when there is nothing to read.
pub fn read_note_text(input: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e));
    }
    if io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read note from stdin: {}", e))?;
    Ok(buffer)
}

fn env_password() -> Option<String> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|value| !value.is_empty())
}
