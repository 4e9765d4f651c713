use crate::app::{open_with_retry, AppContext};
use crate::cli::OpenArgs;
use crate::helpers::{is_interactive, TerminalPrompts};
use crate::output::document_json;

pub fn handle_open(ctx: &AppContext, args: &OpenArgs) -> anyhow::Result<()> {
    let prompts = TerminalPrompts::new(is_interactive(args.no_input));
    let codec = ctx.codec(None)?;
    let (document, format) = open_with_retry(&codec, &args.path, &prompts)?;

    if args.json {
        let value = document_json(&document, format);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{}", document.text);
    if !document.text.is_empty() && !document.text.ends_with('\n') {
        println!();
    }
    Ok(())
}
