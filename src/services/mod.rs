//! Services module - Core maintenance logic for recovering a stuck IDE.
//!
//! The services are framework-agnostic and have no dependency on the CLI
//! layer, making them testable in isolation.
//!
//! # Components
//!
//! - [`PlatformKind`]: Closed variant over the three supported OS families,
//!   carrying the kill-command builder and cache-path table for each.
//! - [`CommandRunner`] / [`ShellRunner`]: Single shell-command execution
//!   that converts every failure into a boolean plus optional logging.
//! - [`Healer`]: The orchestrator sequencing kill, settle, clear, report.
//!
//! # Design Philosophy
//!
//! - **Deterministic**: Commands and paths are pure functions of the run
//!   settings, platform, and home directory.
//! - **Best-effort**: Per-target and per-path failures never abort the run.
//! - **Async**: Subprocess execution and filesystem removal use tokio, each
//!   awaited to completion before the next step.

pub mod command;
pub mod healer;
pub mod platform;

pub use command::{CommandRunner, ShellRunner};
pub use healer::{Healer, SETTLE_DELAY};
pub use platform::{CachePath, HostError, PlatformKind, home_dir};
