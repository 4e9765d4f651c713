use cryptonote_core::{EditorDocument, SaveMode};

use crate::app::AppContext;
use crate::cli::NewArgs;
use crate::errors::cli_error_at;
use crate::helpers::{is_interactive, read_note_text, TerminalPrompts};

pub fn handle_new(ctx: &AppContext, args: &NewArgs) -> anyhow::Result<()> {
    let interactive = is_interactive(args.no_input);
    let prompts = TerminalPrompts::new(interactive);
    let config = ctx.config()?;

    let document = match args.name.as_deref() {
        Some(name) if !name.trim().is_empty() => EditorDocument::with_name(name.trim()),
        _ => EditorDocument::create(&prompts, &config.editor.default_name),
    };
    let document = document.with_text(read_note_text(None)?);

    let Some(output) = args.output.as_deref() else {
        if !ctx.quiet() {
            println!("Created {} ({} bytes, not saved)", document.name, document.text.len());
        }
        return Ok(());
    };

    let mode = if args.encrypt {
        SaveMode::Encrypted
    } else {
        SaveMode::Plain
    };
    let codec = ctx.codec(args.format)?;
    let saved = codec
        .save_file(document, output, mode, &prompts)
        .map_err(|e| cli_error_at(e, output, interactive))?;

    if !ctx.quiet() {
        println!("Created {} at {}", saved.name, output.display());
    }
    Ok(())
}
