// Bounded execution of an external report command (df, ps)

use std::fmt;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::error::FailureReason;

#[derive(Debug, Clone)]
pub struct ReportCommand {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ReportCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Builds from `[program, args...]`; `None` when `argv` is empty.
    pub fn from_argv(argv: &[String], timeout: Duration) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec(), timeout))
    }

    /// Runs the command to completion and returns its stdout.
    /// The child is killed if it outlives the timeout.
    pub async fn run(&self) -> Result<String, FailureReason> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| FailureReason::Spawn {
                command: self.to_string(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| FailureReason::Timeout(self.timeout))?
            .map_err(|source| FailureReason::Spawn {
                command: self.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = match stderr.trim() {
                "" => output.status.to_string(),
                msg => format!("{} ({})", output.status, msg),
            };
            return Err(FailureReason::ExitStatus {
                command: self.to_string(),
                status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl fmt::Display for ReportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
