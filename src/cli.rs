use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration after merging all sources
    Show,
}

#[derive(Parser, Debug)]
#[command(name = "dockprune")]
#[command(about = "Prune unused Docker resources with a version-aware system prune", long_about = None)]
#[command(version = env!("DOCKPRUNE_VERSION"))]
#[command(after_help = "\
INVOCATION PATTERNS:
  The 'prune' command is the default. These are equivalent:

  dockprune                 Shorthand for 'dockprune prune'
  dockprune prune           Explicit prune command

For details about a specific command, use:
  dockprune <command> --help")]
pub struct Cli {
    /// Show verbose output including underlying Docker errors
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove all unused containers, volumes, networks and images
    #[command(long_about = "Remove all unused containers, volumes, networks and images.\n\n\
        Runs 'docker system prune -f' in a fresh terminal session, adding\n\
        '--volumes' when the daemon supports it (17.6.1 and later). This is\n\
        the default command - a bare 'dockprune' does the same thing.")]
    Prune,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show dockprune version
    Version,
}
