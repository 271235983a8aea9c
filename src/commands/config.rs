use crate::cli::ConfigCommands;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::Result;
use std::path::{Path, PathBuf};

pub fn execute(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => validate(file.as_deref()),
        ConfigCommands::Show => show(),
    }
}

fn validate(file: Option<&Path>) -> Result<()> {
    if let Some(file) = file {
        println!("Validating {}...", file.display());
        return match Config::from_file(file) {
            Ok(_) => {
                println!("✓ Configuration is valid!");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {}", e);
                Err(e)
            }
        };
    }

    let working_dir = std::env::current_dir()?;
    let local_config = working_dir.join(CONFIG_FILE_NAME);
    let global_config = std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from("~/.dockprune.toml"));

    println!("Validating configuration files...\n");

    if global_config.exists() {
        println!("  Global config: {}", global_config.display());
    } else {
        println!(
            "  Global config: {} - not found (optional)",
            global_config.display()
        );
    }

    if local_config.exists() {
        println!("  Local config: {}", local_config.display());
    } else {
        println!(
            "  Local config: {} - not found (optional)",
            local_config.display()
        );
    }

    println!("\nLoading and validating configuration...");
    match Config::load(&working_dir) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn show() -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = Config::load(&working_dir)?;

    println!("Effective Configuration:");
    println!("(CLI > Local config > Global config > Defaults)\n");

    println!("Docker:");
    println!(
        "  prompt_on_system_prune: {}",
        config.docker.prompt_on_system_prune
    );

    println!("\nTelemetry:");
    println!("  enabled: {}", config.telemetry.enabled);
    println!("  path: {}", config.telemetry_path().display());

    Ok(())
}
