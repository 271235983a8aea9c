use crate::config::Config;
use crate::engine::DockerCli;
use crate::error::{DockPruneError, Result};
use crate::prompt::StdinPrompt;
use crate::prune::{PruneOutcome, SystemPrune, TelemetryReporter};
use crate::telemetry::FileReporter;
use crate::terminal::ShellTerminalProvider;

pub fn execute(config: &Config) -> Result<()> {
    if !DockerCli::is_installed() {
        return Err(DockPruneError::DockerNotInstalled);
    }

    let reporter = FileReporter::from_config(config);
    let mut prompt = StdinPrompt;
    let mut terminals = ShellTerminalProvider;

    let outcome = SystemPrune {
        config,
        prompt: &mut prompt,
        terminals: &mut terminals,
        engine: &DockerCli,
        reporter: reporter.as_ref().map(|r| r as &dyn TelemetryReporter),
    }
    .run()?;

    match outcome {
        PruneOutcome::Cancelled => {
            println!("Aborted.");
            Ok(())
        }
        PruneOutcome::Completed { .. } => Ok(()),
        PruneOutcome::Failed { error } => {
            // One generic notification; the cause stays in diagnostics
            eprintln!("Unable to connect to Docker, is the Docker daemon running?");
            if config.verbose {
                eprintln!("  Cause: {}", error);
            }
            std::process::exit(1);
        }
    }
}
