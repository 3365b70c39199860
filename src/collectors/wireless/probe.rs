use async_trait::async_trait;
use log::{debug, trace};
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Hard limit on a single diagnostic command invocation
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default diagnostic program
pub const DEFAULT_COMMAND: &str = "iwconfig";

/// Failures while invoking the diagnostic command
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Couldn't run command {command:?}, {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't run command {command:?}, {status}{}", format_stderr(.stderr))]
    Exited {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Couldn't run command {command:?}, timed out after {}s", .timeout.as_secs_f64())]
    TimedOut { command: String, timeout: Duration },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Source of raw link diagnostics for a wireless interface
#[async_trait]
pub trait LinkProbe: Send + Sync {
    /// Returns the raw diagnostic output for `interface_name`
    async fn probe(&self, interface_name: &str) -> Result<Vec<u8>, ProbeError>;
}

/// Runs `<program> <iface>` as a child process and captures its stdout
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
    timeout: Duration,
}

impl Default for CommandProbe {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl CommandProbe {
    /// Creates a probe for `program` with the standard 10 second timeout
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: PROBE_TIMEOUT,
        }
    }

    /// Overrides the invocation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl LinkProbe for CommandProbe {
    async fn probe(&self, interface_name: &str) -> Result<Vec<u8>, ProbeError> {
        let command = format!("{} {}", self.program, interface_name);
        debug!("Running diagnostic command: {}", command);

        let mut cmd = Command::new(&self.program);
        cmd.arg(interface_name)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        // Dropping the output future on timeout kills the child.
        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => return Err(ProbeError::Launch { command, source }),
            Err(_) => {
                return Err(ProbeError::TimedOut {
                    command,
                    timeout: self.timeout,
                });
            }
        };

        if !output.status.success() {
            return Err(ProbeError::Exited {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        trace!("Diagnostic command produced {} bytes", output.stdout.len());
        Ok(output.stdout)
    }
}
