use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cryptonote_core::{SealedFormat, VERSION};

/// CryptoNote - plain-text notes, optionally sealed with a password
#[derive(Parser)]
#[command(name = "cryptonote")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Container format accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Base64 text container
    Text,
    /// Raw binary container
    Binary,
}

impl From<FormatArg> for SealedFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => SealedFormat::FormatA,
            FormatArg::Binary => SealedFormat::FormatB,
        }
    }
}

/// Arguments for the `new` command
#[derive(Args)]
pub struct NewArgs {
    /// Name of the new note (".txt" is appended if missing)
    #[arg(long)]
    pub name: Option<String>,

    /// Save the new note to this path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seal the saved note with a password
    #[arg(long, requires = "output")]
    pub encrypt: bool,

    /// Container format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `open` command
#[derive(Args)]
pub struct OpenArgs {
    /// Note file to open
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `save` command
#[derive(Args)]
pub struct SaveArgs {
    /// Destination path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Read the note from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Seal the note with a password
    #[arg(long)]
    pub encrypt: bool,

    /// Container format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `detect` command
#[derive(Args)]
pub struct DetectArgs {
    /// File to inspect
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `reseal` command
#[derive(Args)]
pub struct ResealArgs {
    /// Existing note (plain or sealed)
    #[arg(value_name = "SRC")]
    pub source: PathBuf,

    /// Where to write the sealed copy
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Container format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `share` command
#[derive(Args)]
pub struct ShareArgs {
    /// Read the note from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Seal the shared copy with a password
    #[arg(long)]
    pub encrypt: bool,

    /// Container format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    /// Write a config file with the default settings
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing config file (with --init)
    #[arg(long, requires = "init")]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a new note
    New(NewArgs),

    /// Print a note, asking for the password if it is sealed
    Open(OpenArgs),

    /// Write a note from stdin or a file, plain or sealed
    Save(SaveArgs),

    /// Report whether a file is plain text or a sealed container
    Detect(DetectArgs),

    /// Rewrite a note as a sealed container in the chosen format
    Reseal(ResealArgs),

    /// Write a copy to the temp directory for attaching to a message
    Share(ShareArgs),

    /// Show the effective configuration, or write the defaults
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
