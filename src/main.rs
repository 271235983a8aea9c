#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use dockprune::cli::{Cli, Commands};
use dockprune::commands;
use dockprune::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle commands that don't need config
    match &cli.command {
        Some(Commands::Version) => {
            commands::version::execute()?;
            return Ok(());
        }
        Some(Commands::Config { command }) => {
            commands::config::execute(command)?;
            return Ok(());
        }
        _ => {}
    }

    let working_dir = std::env::current_dir()?;
    let config = Config::load(&working_dir)?.with_cli_overrides(&cli);

    // Prune is the default when no subcommand is given
    match &cli.command {
        Some(Commands::Prune) | None => commands::prune::execute(&config)?,
        _ => unreachable!(),
    }

    Ok(())
}
