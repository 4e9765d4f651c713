//! Constants used throughout the CLI.

/// Environment variable that supplies the password non-interactively.
pub const PASSWORD_ENV: &str = "CRYPTONOTE_PASSWORD";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CRYPTONOTE_CONFIG";

/// Password attempts allowed when opening a sealed note at a terminal.
pub const MAX_PASSWORD_ATTEMPTS: u32 = 3;

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Note file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// Container is corrupted (bad base64, truncated, unrecognized).
    pub const CORRUPTED: i32 = 6;

    /// The user dismissed a prompt.
    pub const CANCELLED: i32 = 130;
}
