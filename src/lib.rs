// Agheal - Recovery utility for stuck Antigravity IDE installations
//
// This is the library crate containing the core maintenance logic.
// The binary crate (main.rs) provides the CLI entry point.

pub mod config;
pub mod console;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use console::{LogLevel, LogSink, Logger};
pub use models::{HealSettings, UserConfig};
pub use services::{CachePath, CommandRunner, Healer, PlatformKind, ShellRunner};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
