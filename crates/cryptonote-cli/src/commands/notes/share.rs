use cryptonote_core::SaveMode;

use crate::app::AppContext;
use crate::cli::ShareArgs;
use crate::errors::cli_error;
use crate::helpers::{is_interactive, read_note_text, TerminalPrompts};

pub fn handle_share(ctx: &AppContext, args: &ShareArgs) -> anyhow::Result<()> {
    let interactive = is_interactive(args.no_input);
    let prompts = TerminalPrompts::new(interactive);
    let codec = ctx.codec(args.format)?;
    let file_name = &ctx.config()?.share.file_name;

    let text = read_note_text(args.input.as_deref())?;
    let mode = if args.encrypt {
        SaveMode::Encrypted
    } else {
        SaveMode::Plain
    };
    let path = codec
        .export_for_sharing(&text, file_name, mode, &prompts)
        .map_err(|e| cli_error(e, interactive))?;

    // The path goes to stdout even in quiet mode so scripts can pick it up.
    println!("{}", path.display());
    Ok(())
}
