use crate::engine::version;
use crate::engine::EngineInfo;
use crate::error::{DockPruneError, Result};

/// Label given to the terminal session that carries the prune command.
pub const PRUNE_SESSION_LABEL: &str = "docker system prune";

pub const PRUNE_PROMPT: &str = "Remove all unused containers, volumes, networks and images (both dangling and unreferenced)?";

pub const TELEMETRY_EVENT: &str = "command";

// Historic event id, kept verbatim so existing telemetry aggregation
// over the payload continues to match.
pub const TELEMETRY_COMMAND_ID: &str = "vscode-docker.system.prune";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    Cancel,
}

/// Read-only view of the settings the prune flow consults.
pub trait ConfigStore {
    fn prompt_on_system_prune(&self) -> bool;
}

/// Blocking yes/cancel confirmation. Dismissing without an answer
/// maps to `Choice::Cancel`.
pub trait ConfirmationPrompt {
    fn confirm(&mut self, message: &str) -> Result<Choice>;
}

/// An interactive session that accepts command text and can be
/// brought into view. Outlives the prune flow that created it.
pub trait InteractiveSession {
    fn send_text(&mut self, line: &str) -> Result<()>;
    fn show(&mut self) -> Result<()>;
}

pub trait TerminalProvider {
    type Session: InteractiveSession;

    fn create(&mut self, label: &str) -> Result<Self::Session>;
}

pub trait EngineClient {
    fn engine_info(&self) -> Result<EngineInfo>;
}

pub trait TelemetryReporter {
    fn send_event(&self, name: &str, properties: &[(&str, &str)]);
}

/// What a single prune invocation amounted to.
#[derive(Debug)]
pub enum PruneOutcome {
    /// User declined or dismissed the prompt. No command sent, no telemetry.
    Cancelled,
    /// Command sent to the session and the session shown.
    Completed { command: String },
    /// Engine query or session handoff failed; recovered by the caller.
    Failed { error: DockPruneError },
}

/// The system prune flow over injectable collaborators.
///
/// A session is created before the prompt, so cancellation still leaves
/// one (empty) session behind. Telemetry fires on completion and on
/// failure, never on cancellation, and only when a reporter is present.
pub struct SystemPrune<'a, C, P, T, E>
where
    C: ConfigStore,
    P: ConfirmationPrompt,
    T: TerminalProvider,
    E: EngineClient,
{
    pub config: &'a C,
    pub prompt: &'a mut P,
    pub terminals: &'a mut T,
    pub engine: &'a E,
    pub reporter: Option<&'a dyn TelemetryReporter>,
}

impl<C, P, T, E> SystemPrune<'_, C, P, T, E>
where
    C: ConfigStore,
    P: ConfirmationPrompt,
    T: TerminalProvider,
    E: EngineClient,
{
    pub fn run(&mut self) -> Result<PruneOutcome> {
        let prompt_enabled = self.config.prompt_on_system_prune();
        let mut session = self.terminals.create(PRUNE_SESSION_LABEL)?;

        if prompt_enabled {
            if let Choice::Cancel = self.prompt.confirm(PRUNE_PROMPT)? {
                return Ok(PruneOutcome::Cancelled);
            }
        }

        let outcome = match self.prune_into(&mut session) {
            Ok(command) => PruneOutcome::Completed { command },
            Err(error) => PruneOutcome::Failed { error },
        };

        if let Some(reporter) = self.reporter {
            reporter.send_event(TELEMETRY_EVENT, &[("command", TELEMETRY_COMMAND_ID)]);
        }

        Ok(outcome)
    }

    fn prune_into(&self, session: &mut T::Session) -> Result<String> {
        let info = self.engine.engine_info()?;

        // 17.6.1 and later require --volumes to prune volumes
        let command = if version::supports_volumes_flag(&info.server_version)? {
            "docker system prune --volumes -f"
        } else {
            "docker system prune -f"
        };

        session.send_text(command)?;
        session.show()?;

        Ok(command.to_string())
    }
}
