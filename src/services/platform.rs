//! Platform tables: kill-command construction and cache-path resolution.
//!
//! Everything here is pure string/path construction. The host is probed once
//! at startup ([`PlatformKind::detect`], [`home_dir`]) and the results are
//! treated as constants for the rest of the run.

use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use thiserror::Error;

/// Vendor directory used by the IDE's per-user data tree.
const VENDOR_DIR: &str = "Google";

/// Application directory under the vendor directory.
const APP_DIR: &str = "Antigravity";

/// XDG-style config directory name on Linux.
const LINUX_CONFIG_DIR: &str = "google-antigravity";

/// Errors probing the host environment.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("could not determine the current user's home directory")]
    HomeDirUnavailable,

    #[error("home directory is not valid UTF-8: {0:?}")]
    NonUtf8HomeDir(PathBuf),
}

/// The three supported OS families, derived once from the host at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Windows,
    MacOs,
    Linux,
}

/// A cache directory slated for removal, tagged with a human label.
///
/// Recomputed fresh every run; never stored between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePath {
    pub label: &'static str,
    pub path: Utf8PathBuf,
}

impl PlatformKind {
    /// Detect the platform family of the running host.
    ///
    /// Unrecognized Unix variants fall back to the Linux layout.
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            PlatformKind::Windows
        } else if cfg!(target_os = "macos") {
            PlatformKind::MacOs
        } else {
            PlatformKind::Linux
        }
    }

    /// Build the force-kill command line for one target process name.
    ///
    /// Windows kills by image name with process-tree termination and the
    /// `.exe` suffix convention; Unix-likes pattern-match the full command
    /// line with `pkill -f`.
    pub fn kill_command(&self, target: &str) -> String {
        match self {
            PlatformKind::Windows => format!("taskkill /F /IM \"{}.exe\" /T", target),
            PlatformKind::MacOs | PlatformKind::Linux => format!("pkill -f \"{}\"", target),
        }
    }

    /// Resolve the cache directories to purge, in deletion order.
    pub fn cache_paths(&self, home_dir: &Utf8Path) -> Vec<CachePath> {
        match self {
            PlatformKind::Windows => {
                let base = home_dir
                    .join("AppData")
                    .join("Roaming")
                    .join(VENDOR_DIR)
                    .join(APP_DIR);
                vec![
                    CachePath {
                        label: "Cache",
                        path: base.join("Cache"),
                    },
                    CachePath {
                        label: "GPUCache",
                        path: base.join("GPUCache"),
                    },
                ]
            }
            PlatformKind::MacOs => {
                let base = home_dir
                    .join("Library")
                    .join("Application Support")
                    .join(VENDOR_DIR)
                    .join(APP_DIR);
                vec![
                    CachePath {
                        label: "Cache",
                        path: base.join("Cache"),
                    },
                    CachePath {
                        label: "GPUCache",
                        path: base.join("GPUCache"),
                    },
                ]
            }
            PlatformKind::Linux => {
                let base = home_dir.join(".config").join(LINUX_CONFIG_DIR);
                vec![CachePath {
                    label: "Cache",
                    path: base.join("Cache"),
                }]
            }
        }
    }
}

/// Resolve the current user's home directory as a UTF-8 path.
pub fn home_dir() -> Result<Utf8PathBuf, HostError> {
    let home = dirs::home_dir().ok_or(HostError::HomeDirUnavailable)?;
    Utf8PathBuf::from_path_buf(home).map_err(HostError::NonUtf8HomeDir)
}
