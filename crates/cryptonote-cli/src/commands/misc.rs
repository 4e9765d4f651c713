use clap::CommandFactory;
use clap_complete::generate;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{Cli, ConfigArgs};
use crate::config::{write_config, NoteConfig};
use crate::errors::CliError;

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "cryptonote", &mut std::io::stdout());
    Ok(())
}

pub fn handle_config(ctx: &AppContext, args: &ConfigArgs) -> anyhow::Result<()> {
    let path = resolve_config_path()?;

    if args.init {
        if path.exists() && !args.force {
            return Err(CliError::invalid_input(format!(
                "Config already exists at {}. Use --force to overwrite.",
                path.display()
            ))
            .into());
        }
        write_config(&path, &NoteConfig::default())?;
        if !ctx.quiet() {
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let config = ctx.config()?;
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    if !ctx.quiet() {
        println!("# {}", path.display());
    }
    print!("{}", contents);
    Ok(())
}
