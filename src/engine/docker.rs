use crate::error::{DockPruneError, Result};
use serde::Deserialize;
use std::process::Command;

/// Subset of the `docker info` response consumed by the prune flow.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineInfo {
    #[serde(rename = "ServerVersion", default)]
    pub server_version: String,
}

pub struct DockerCli;

impl DockerCli {
    /// Check if the docker CLI is installed
    pub fn is_installed() -> bool {
        which::which("docker").is_ok()
    }

    /// Query the daemon for engine info
    pub fn engine_info() -> Result<EngineInfo> {
        let output = Command::new("docker")
            .args(["info", "--format", "{{json .}}"])
            .output()
            .map_err(|e| {
                DockPruneError::DockerExecution(format!("Failed to query engine info: {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DockPruneError::DockerExecution(format!(
                "docker info exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let info: EngineInfo = serde_json::from_slice(&output.stdout)?;
        if info.server_version.is_empty() {
            // docker info still succeeds when only the client half answers
            return Err(DockPruneError::MissingServerVersion);
        }

        Ok(info)
    }
}

impl crate::prune::EngineClient for DockerCli {
    fn engine_info(&self) -> Result<EngineInfo> {
        DockerCli::engine_info()
    }
}
