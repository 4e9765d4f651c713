use cryptonote_core::SaveMode;

use crate::app::{open_with_retry, AppContext};
use crate::cli::ResealArgs;
use crate::errors::cli_error_at;
use crate::helpers::{is_interactive, TerminalPrompts};

/// Open `source` (plain or any container) and write it sealed to `destination`.
pub fn handle_reseal(ctx: &AppContext, args: &ResealArgs) -> anyhow::Result<()> {
    let interactive = is_interactive(args.no_input);
    let prompts = TerminalPrompts::new(interactive);
    let codec = ctx.codec(args.format)?;

    let (document, _) = open_with_retry(&codec, &args.source, &prompts)?;
    let saved = codec
        .save_file(document, &args.destination, SaveMode::Encrypted, &prompts)
        .map_err(|e| cli_error_at(e, &args.destination, interactive))?;

    if !ctx.quiet() {
        println!(
            "Resealed {} as {} container at {}",
            args.source.display(),
            codec.format(),
            args.destination.display()
        );
    }
    tracing::debug!(name = %saved.name, "reseal complete");
    Ok(())
}
