//! Application context for the CryptoNote CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded configuration file.

use once_cell::unsync::OnceCell;

use cryptonote_core::{NoteCodec, SealedFormat};

use crate::cli::{Cli, FormatArg};
use crate::config::{read_config, NoteConfig};

use super::resolver::resolve_config_path;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<NoteConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&NoteConfig> {
        self.config
            .get_or_try_init(|| read_config(&resolve_config_path()?))
    }

    /// Build a codec writing the `--format` override or the configured format.
    pub fn codec(&self, format: Option<FormatArg>) -> anyhow::Result<NoteCodec> {
        let format = match format {
            Some(arg) => SealedFormat::from(arg),
            None => SealedFormat::from(self.config()?.codec.format),
        };
        tracing::debug!(format = %format, "container format selected");
        Ok(NoteCodec::new(format))
    }
}
