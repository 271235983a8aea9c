use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockPruneError {
    #[error("Docker not installed. Install from https://docs.docker.com/get-docker/")]
    DockerNotInstalled,

    #[error("Docker subprocess failed: {0}")]
    DockerExecution(String),

    #[error("Engine info response could not be parsed: {0}")]
    EngineInfoParse(#[from] serde_json::Error),

    #[error("Engine info is missing a server version")]
    MissingServerVersion,

    #[error("Invalid server version '{0}': {1}")]
    InvalidServerVersion(String, String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

pub type Result<T> = std::result::Result<T, DockPruneError>;
