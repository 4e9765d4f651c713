use cryptonote_core::classify;

use crate::app::AppContext;
use crate::cli::DetectArgs;
use crate::errors::CliError;
use crate::output::detection_json;

pub fn handle_detect(ctx: &AppContext, args: &DetectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::Error::from(CliError::not_found(
                format!("File not found: {}", args.path.display()),
                "Hint: Check the path and try again.",
            ))
        } else {
            anyhow::anyhow!("Failed to read {}: {}", args.path.display(), e)
        }
    })?;
    let format = classify(&bytes);

    if args.json {
        let value = detection_json(&args.path, format, bytes.len());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if ctx.quiet() {
        println!("{}", format.as_str());
    } else {
        println!("{}: {}", args.path.display(), format.as_str());
    }
    Ok(())
}
