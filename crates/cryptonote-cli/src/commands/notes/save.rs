use cryptonote_core::{EditorDocument, SaveMode};

use crate::app::AppContext;
use crate::cli::SaveArgs;
use crate::errors::cli_error_at;
use crate::helpers::{is_interactive, read_note_text, TerminalPrompts};

pub fn handle_save(ctx: &AppContext, args: &SaveArgs) -> anyhow::Result<()> {
    let interactive = is_interactive(args.no_input);
    let prompts = TerminalPrompts::new(interactive);
    let codec = ctx.codec(args.format)?;

    let document = EditorDocument::new().with_text(read_note_text(args.input.as_deref())?);
    let mode = if args.encrypt {
        SaveMode::Encrypted
    } else {
        SaveMode::Plain
    };

    let saved = codec
        .save_file(document, &args.path, mode, &prompts)
        .map_err(|e| cli_error_at(e, &args.path, interactive))?;

    if !ctx.quiet() {
        match mode {
            SaveMode::Plain => println!("Saved {} as plain text", saved.name),
            SaveMode::Encrypted => {
                println!("Saved {} as {} container", saved.name, codec.format())
            }
        }
    }
    Ok(())
}
