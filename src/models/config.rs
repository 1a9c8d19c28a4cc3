use serde::{Deserialize, Serialize};

/// User configuration from `Agheal Config.yaml`.
///
/// Contains the per-run maintenance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Heal_Settings", default)]
    pub heal_settings: HealSettings,
}

/// Immutable run settings for one maintenance pass.
///
/// Constructed once at the entry point (config file plus CLI overrides) and
/// never mutated afterwards; every per-run decision is a pure function of
/// these values plus the host platform and home directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealSettings {
    /// Process names to terminate, in kill order. Duplicates are permitted
    /// and attempted again.
    #[serde(rename = "Target Processes", default = "default_targets")]
    pub target_processes: Vec<String>,

    /// When true, report intended deletions without touching the filesystem.
    #[serde(rename = "Dry Run", default)]
    pub dry_run: bool,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for HealSettings {
    fn default() -> Self {
        Self {
            target_processes: default_targets(),
            dry_run: false,
            debug_mode: false,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            heal_settings: HealSettings::default(),
        }
    }
}

fn default_targets() -> Vec<String> {
    vec![
        "Antigravity Helper".to_string(),
        "antigravity-agent".to_string(),
        "g-agent-service".to_string(),
    ]
}

impl HealSettings {
    /// Apply command-line overrides, consuming the file-based settings.
    ///
    /// A non-empty `targets` list replaces the configured list wholesale;
    /// the boolean flags only ever turn a setting on.
    pub fn with_overrides(mut self, targets: Vec<String>, dry_run: bool, debug: bool) -> Self {
        if !targets.is_empty() {
            self.target_processes = targets;
        }
        if dry_run {
            self.dry_run = true;
        }
        if debug {
            self.debug_mode = true;
        }
        self
    }
}
