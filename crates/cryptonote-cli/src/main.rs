//! CryptoNote CLI - plain-text notes, optionally sealed with a password
//!
//! This is the command-line front end for CryptoNote. It supplies terminal
//! prompts to the core codec and maps its errors to exit codes.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::Parser;
use cryptonote_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{misc, notes};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        eprintln!("Warning: {}", e);
    }
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::New(args)) => {
            notes::handle_new(ctx, args)?;
        }
        Some(Commands::Open(args)) => {
            notes::handle_open(ctx, args)?;
        }
        Some(Commands::Save(args)) => {
            notes::handle_save(ctx, args)?;
        }
        Some(Commands::Detect(args)) => {
            notes::handle_detect(ctx, args)?;
        }
        Some(Commands::Reseal(args)) => {
            notes::handle_reseal(ctx, args)?;
        }
        Some(Commands::Share(args)) => {
            notes::handle_share(ctx, args)?;
        }
        Some(Commands::Config(args)) => {
            misc::handle_config(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args.shell)?;
        }
        None => {
            println!("CryptoNote v{}", VERSION);
            println!("\nQuickstart:");
            println!("  echo \"secret\" | cryptonote save notes.txt --encrypt");
            println!("  cryptonote open notes.txt");
            println!("  cryptonote detect notes.txt");
            println!("  cryptonote reseal notes.txt notes.bin --format binary");
            println!("\nRun `cryptonote --help` for full usage.");
        }
    }

    Ok(())
}
