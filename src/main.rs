//! Agheal - Recovery utility for stuck Antigravity IDE installations
//!
//! Main entry point for the CLI. It initializes:
//! - Configuration loading ([`ConfigManager`] + CLI overrides)
//! - Diagnostic file logging (daily rotation under `logs/`)
//! - Tokio async runtime (subprocess execution, settle delay, file removal)
//! - The [`Healer`] orchestrator
//!
//! # Execution Flow
//!
//! 1. Parse CLI arguments
//! 2. Load `Agheal Config.yaml` from the config directory, apply overrides
//! 3. Initialize logging → logs/agheal.<date>
//! 4. Probe the host once: platform family and home directory
//! 5. Run the healer to completion on the tokio runtime
//! 6. Shutdown the runtime with a 5s timeout
//!
//! The healer itself never fails: all per-target and per-path errors end up
//! as console log lines, and the process exits normally.

use agheal::services::{ShellRunner, home_dir};
use agheal::{APP_NAME, ConfigManager, Healer, Logger, PlatformKind, VERSION};
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Recover a stuck Antigravity install: kill lingering helpers and clear caches"
)]
struct Args {
    /// Directory containing Agheal Config.yaml
    #[arg(long, default_value = "Agheal Data")]
    config_dir: String,

    /// Process name/pattern to kill (repeatable; replaces the configured list)
    #[arg(long = "target")]
    targets: Vec<String>,

    /// Report intended deletions without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Enable debug-level diagnostic logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Assemble the immutable run settings before anything else starts.
    let config_manager = ConfigManager::new(&args.config_dir)?;
    let user_config = config_manager.load_user_config()?;
    let settings = user_config
        .heal_settings
        .with_overrides(args.targets, args.dry_run, args.debug);

    let _guard = agheal::logging::setup_logging("logs", "agheal", settings.debug_mode)?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Host facts are read once and constant for the run.
    let platform = PlatformKind::detect();
    let home = home_dir()?;
    tracing::info!("Host: platform={:?}, home={}", platform, home);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("agheal-worker")
        .build()?;

    let logger = Arc::new(Logger::stdout());
    let runner = ShellRunner::new(Arc::clone(&logger));
    let healer = Healer::new(settings, platform, home, runner, logger);

    runtime.block_on(healer.execute());

    runtime.shutdown_timeout(std::time::Duration::from_secs(5));
    tracing::info!("Maintenance run finished");

    Ok(())
}
