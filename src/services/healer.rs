//! The maintenance orchestrator: kill, settle, clear, report.

use crate::console::{LogLevel, Logger};
use crate::models::HealSettings;
use crate::services::command::CommandRunner;
use crate::services::platform::{CachePath, PlatformKind};
use anyhow::Result;
use camino::Utf8PathBuf;
use std::io::ErrorKind;
use std::sync::Arc;
use std::time::Duration;

/// Pause between the last kill attempt and the first cache deletion, giving
/// the OS time to release file handles held by just-terminated processes.
pub const SETTLE_DELAY: Duration = Duration::from_millis(2000);

/// One-shot maintenance orchestrator.
///
/// Runs four strictly ordered phases with no retries and no branching back:
/// kill target processes, settle, clear caches, report. All per-target and
/// per-path failures are converted into log lines at their point of origin;
/// only a structural failure in the orchestration itself reaches the
/// top-level boundary in [`Healer::execute`].
pub struct Healer<R: CommandRunner> {
    settings: HealSettings,
    platform: PlatformKind,
    home_dir: Utf8PathBuf,
    runner: R,
    logger: Arc<Logger>,
    settle_delay: Duration,
}

impl<R: CommandRunner> Healer<R> {
    pub fn new(
        settings: HealSettings,
        platform: PlatformKind,
        home_dir: Utf8PathBuf,
        runner: R,
        logger: Arc<Logger>,
    ) -> Self {
        Self {
            settings,
            platform,
            home_dir,
            runner,
            logger,
            settle_delay: SETTLE_DELAY,
        }
    }

    /// Override the settle delay. Test hook; production runs keep
    /// [`SETTLE_DELAY`].
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Run the full maintenance sequence.
    ///
    /// This is the only recovery boundary: anything that escapes the phases
    /// is converted into a single ERROR line, and the process still exits
    /// normally.
    pub async fn execute(&self) {
        self.logger
            .log(LogLevel::Info, "Starting Antigravity recovery sequence...");

        if let Err(e) = self.run_phases().await {
            self.logger.log(
                LogLevel::Error,
                &format!("Critical failure during execution: {:#}", e),
            );
        }
    }

    async fn run_phases(&self) -> Result<()> {
        self.kill_target_processes().await;

        // Settle delay: unconditional, no early wake.
        tokio::time::sleep(self.settle_delay).await;

        self.clear_caches().await;

        self.logger.log(
            LogLevel::Success,
            "Maintenance complete. Please restart Antigravity.",
        );
        Ok(())
    }

    /// Issue one kill command per configured target, in order, best-effort.
    ///
    /// The closing SUCCESS reflects "attempted cleanup", not "all processes
    /// confirmed dead".
    async fn kill_target_processes(&self) {
        self.logger
            .log(LogLevel::Info, "Scanning for lingering helper processes...");

        for target in &self.settings.target_processes {
            let command = self.platform.kill_command(target);
            self.runner.run(&command).await;
        }

        self.logger
            .log(LogLevel::Success, "Process cleanup routine finished.");
    }

    /// Remove each resolved cache directory, continuing on any outcome.
    async fn clear_caches(&self) {
        self.logger
            .log(LogLevel::Info, "Locating cache directories...");

        for cache in self.platform.cache_paths(&self.home_dir) {
            self.delete_directory(&cache).await;
        }
    }

    async fn delete_directory(&self, cache: &CachePath) {
        let path = &cache.path;

        if self.settings.dry_run {
            self.logger
                .log(LogLevel::Info, &format!("[DRY RUN] Would delete: {}", path));
            return;
        }

        match tokio::fs::remove_dir_all(path.as_std_path()).await {
            Ok(()) => {
                self.logger
                    .log(LogLevel::Success, &format!("Cleared Cache: {}", path));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Absence is an expected terminal state, not a failure.
                self.logger
                    .log(LogLevel::Info, &format!("Path already clean: {}", path));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                self.logger.log(
                    LogLevel::Error,
                    &format!("Permission denied for: {}. Try running as Admin/Sudo.", path),
                );
            }
            Err(e) => {
                self.logger.log(
                    LogLevel::Error,
                    &format!("Failed to delete {}: {}", path, e),
                );
            }
        }
    }
}
