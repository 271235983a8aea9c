use crate::cli::Cli;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".dockprune.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub docker: DockerConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Verbose mode - show underlying Docker errors (not stored in config file)
    #[serde(skip)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    /// Ask for confirmation before running a system prune
    #[serde(default = "default_prompt_on_system_prune")]
    pub prompt_on_system_prune: bool,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            prompt_on_system_prune: default_prompt_on_system_prune(),
        }
    }
}

fn default_prompt_on_system_prune() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Record command events to a local JSONL file
    #[serde(default)]
    pub enabled: bool,

    /// Where events are appended (supports a leading ~)
    #[serde(default = "default_telemetry_path")]
    pub path: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_telemetry_path(),
        }
    }
}

fn default_telemetry_path() -> String {
    "~/.dockprune/telemetry.jsonl".to_string()
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Environment variables
    /// 3. Working-directory config (./.dockprune.toml)
    /// 4. Global config (~/.dockprune.toml)
    /// 5. Built-in defaults
    pub fn load(working_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = home_dir() {
            let global_config = home.join(CONFIG_FILE_NAME);
            if global_config.exists() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let local_config = working_dir.join(CONFIG_FILE_NAME);
        if local_config.exists() {
            config = config.merge(Self::from_file(&local_config)?);
        }

        config = config.merge_env();

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.docker.prompt_on_system_prune != default_prompt_on_system_prune() {
            self.docker.prompt_on_system_prune = other.docker.prompt_on_system_prune;
        }

        if other.telemetry.enabled {
            self.telemetry.enabled = true;
        }
        if other.telemetry.path != default_telemetry_path() {
            self.telemetry.path = other.telemetry.path;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Ok(prompt) = std::env::var("DOCKPRUNE_PROMPT_ON_SYSTEM_PRUNE") {
            if let Some(prompt) = parse_bool(&prompt) {
                self.docker.prompt_on_system_prune = prompt;
            }
        }

        if let Ok(enabled) = std::env::var("DOCKPRUNE_TELEMETRY") {
            if let Some(enabled) = parse_bool(&enabled) {
                self.telemetry.enabled = enabled;
            }
        }

        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        self.verbose = cli.verbose;
        self
    }

    /// Telemetry sink path with a leading ~ expanded to the home directory
    pub fn telemetry_path(&self) -> PathBuf {
        if let Some(rest) = self.telemetry.path.strip_prefix("~/") {
            if let Some(home) = home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(&self.telemetry.path)
    }
}

impl crate::prune::ConfigStore for Config {
    fn prompt_on_system_prune(&self) -> bool {
        self.docker.prompt_on_system_prune
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
