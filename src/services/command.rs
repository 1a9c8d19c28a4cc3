//! Shell command execution with graceful failure handling.

use crate::console::{LogLevel, Logger};
use std::future::Future;
use std::sync::Arc;
use tokio::process::Command;

/// Executes a single OS shell command line.
///
/// Implementations never return an error: every failure is converted into
/// the boolean result plus optional logging, so a kill attempt against an
/// already-dead process cannot abort the run.
pub trait CommandRunner {
    /// Run the command to completion. Returns true on a zero exit status.
    fn run(&self, command: &str) -> impl Future<Output = bool> + Send;
}

/// [`CommandRunner`] backed by the platform shell.
///
/// Uses `cmd /C` on Windows and `sh -c` elsewhere, awaiting the subprocess
/// to completion before returning.
pub struct ShellRunner {
    logger: Arc<Logger>,
}

impl ShellRunner {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> bool {
        tracing::debug!("Executing: {}", command);

        let mut cmd = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", command]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", command]);
            c
        };

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) => {
                self.logger.log(
                    LogLevel::Warn,
                    &format!("Command failed: {}. Details: {}", command, e),
                );
                return false;
            }
        };

        if output.status.success() {
            return true;
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() && !is_benign_failure(&stderr) {
            self.logger.log(
                LogLevel::Warn,
                &format!("Command failed: {}. Details: {}", command, stderr.trim()),
            );
        }
        false
    }
}

/// A kill attempt against a process that is already gone is expected and
/// must not alarm the operator. The substrings are exact and case-sensitive:
/// broadening them would change which failures are silently swallowed.
fn is_benign_failure(stderr: &str) -> bool {
    stderr.contains("not found") || stderr.contains("No such process")
}
