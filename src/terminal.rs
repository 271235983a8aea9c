use crate::error::{DockPruneError, Result};
use crate::prune::{InteractiveSession, TerminalProvider};
use std::process::{Command, Stdio};

/// Creates shell-backed sessions. Creation is side-effect free; the
/// session only spawns a shell once it is shown with text pending.
pub struct ShellTerminalProvider;

impl TerminalProvider for ShellTerminalProvider {
    type Session = ShellTerminal;

    fn create(&mut self, label: &str) -> Result<ShellTerminal> {
        Ok(ShellTerminal {
            label: label.to_string(),
            pending: Vec::new(),
        })
    }
}

/// A labeled session that buffers command lines and runs them through
/// `sh -c` with inherited stdio when brought into view.
pub struct ShellTerminal {
    label: String,
    pending: Vec<String>,
}

impl ShellTerminal {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl InteractiveSession for ShellTerminal {
    fn send_text(&mut self, line: &str) -> Result<()> {
        self.pending.push(line.to_string());
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        for line in self.pending.drain(..) {
            println!("$ {}", line);

            let status = Command::new("sh")
                .arg("-c")
                .arg(&line)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| {
                    DockPruneError::CommandFailed(format!("Failed to run '{}': {}", line, e))
                })?;

            if !status.success() {
                return Err(DockPruneError::CommandFailed(format!(
                    "'{}' exited with {}",
                    line, status
                )));
            }
        }

        Ok(())
    }
}
