use crate::config::Config;
use crate::prune::TelemetryReporter;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends one JSON line per event to a local file. Only constructed
/// when telemetry is enabled in the config; callers treat the absent
/// reporter as a no-op.
pub struct FileReporter {
    path: PathBuf,
}

impl FileReporter {
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.telemetry.enabled {
            return None;
        }
        Some(Self {
            path: config.telemetry_path(),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn append(&self, name: &str, properties: &[(&str, &str)]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let props: serde_json::Map<String, serde_json::Value> = properties
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
            .collect();
        let event = serde_json::json!({
            "event": name,
            "properties": props,
            "timestamp": Utc::now().to_rfc3339(),
        });

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", event)
    }
}

impl TelemetryReporter for FileReporter {
    fn send_event(&self, name: &str, properties: &[(&str, &str)]) {
        // Telemetry must never fail the command it decorates
        let _ = self.append(name, properties);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_respects_enabled_flag() {
        let config = Config::default();
        assert!(FileReporter::from_config(&config).is_none());

        let mut config = Config::default();
        config.telemetry.enabled = true;
        assert!(FileReporter::from_config(&config).is_some());
    }

    #[test]
    fn test_events_are_appended_as_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");
        let reporter = FileReporter::with_path(path.clone());

        reporter.send_event("command", &[("command", "vscode-docker.system.prune")]);
        reporter.send_event("command", &[("command", "vscode-docker.system.prune")]);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event["event"], "command");
        assert_eq!(event["properties"]["command"], "vscode-docker.system.prune");
        assert!(event["timestamp"].is_string());
    }

    #[test]
    fn test_unwritable_path_is_swallowed() {
        let reporter = FileReporter::with_path(PathBuf::from("/dev/null/not/a/dir"));
        // Must not panic or error
        reporter.send_event("command", &[]);
    }
}
