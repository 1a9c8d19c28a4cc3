//! Data models for run configuration.

pub mod config;

pub use config::{HealSettings, UserConfig};
