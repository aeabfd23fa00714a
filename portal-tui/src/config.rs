//! Runtime configuration for the portal.
//!
//! Every value has a compile-time default and can be overridden through an
//! environment variable. Command-line flags take precedence over both.

use std::path::PathBuf;

/// Default asset base: a directory next to the working directory.
const DEFAULT_ASSET_BASE: &str = "NintendoPCB";

/// Default directory for the rolling log file.
const DEFAULT_LOG_DIR: &str = "logs";

const DEFAULT_THEME: &str = "dark";

/// Prefix of the daily log file, `pcb-portal.YYYY-MM-DD`.
pub const LOG_FILE_PREFIX: &str = "pcb-portal";

/// Get the asset base (directory path or http(s) URL).
///
/// Priority:
/// 1. `PCB_PORTAL_ASSETS` env variable if set
/// 2. `NintendoPCB` as fallback
pub fn get_asset_base() -> String {
    if let Ok(base) = std::env::var("PCB_PORTAL_ASSETS") {
        return base;
    }

    DEFAULT_ASSET_BASE.to_string()
}

/// Get the catalog file path, if one is configured.
///
/// `None` means the compiled-in board table is used.
pub fn get_catalog_path() -> Option<PathBuf> {
    std::env::var("PCB_PORTAL_CATALOG")
        .ok()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Get the log directory.
///
/// Priority:
/// 1. `PCB_PORTAL_LOG_DIR` env variable if set
/// 2. `logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PCB_PORTAL_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Get the theme preference (`dark` or `light`).
pub fn get_theme() -> String {
    std::env::var("PCB_PORTAL_THEME").unwrap_or_else(|_| DEFAULT_THEME.to_string())
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub asset_base: String,
    pub catalog_path: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub theme: String,
}

impl PortalConfig {
    /// Merge explicit overrides (from the command line) over the environment.
    pub fn resolve(
        asset_base: Option<String>,
        catalog_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        theme: Option<String>,
    ) -> Self {
        Self {
            asset_base: asset_base.unwrap_or_else(get_asset_base),
            catalog_path: catalog_path.or_else(get_catalog_path),
            log_dir: log_dir.unwrap_or_else(get_log_dir),
            theme: theme.unwrap_or_else(get_theme),
        }
    }
}
