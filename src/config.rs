use std::path::{Path, PathBuf};

use crate::source::{scan_for_key, split_assignment, unquote};

pub const CONFIG_FILE_NAME: &str = ".config";
pub const KEY_TARGET: &str = "CONFIG_PRJ_TARGET";
pub const KEY_APP: &str = "CONFIG_PRJ_APP";

const DEFAULT_TARGET: &str = "desktop_linux";
const DEFAULT_APP: &str = "basic_circuit";

/// Resolved project configuration. Both fields are always populated;
/// resolution falls back to the fixed defaults for anything unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub target: String,
    pub app: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            app: DEFAULT_APP.to_string(),
        }
    }
}

pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

pub fn config_file_present(root: &Path) -> bool {
    config_file_path(root).exists()
}

/// Resolve the project configuration from `<root>/.config`.
///
/// Never fails: a missing file, an unreadable file, and unrecognized or
/// malformed lines all degrade to the defaults for the fields concerned.
/// When a recognized key appears more than once, the last line wins.
pub async fn resolve_project_config(root: &Path) -> ProjectConfig {
    let path = config_file_path(root);
    let mut cfg = ProjectConfig::default();

    if !path.exists() {
        tracing::warn!("config: {} not found, using defaults", path.display());
        return cfg;
    }

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => {
            for line in content.lines() {
                if let Some((key, raw)) = split_assignment(line) {
                    match key {
                        KEY_TARGET => cfg.target = unquote(raw).to_string(),
                        KEY_APP => cfg.app = unquote(raw).to_string(),
                        // Unknown keys are ignored so future keys stay compatible
                        _ => {}
                    }
                }
            }
        }
        Err(err) => {
            tracing::error!("config: failed to read {}: {}", path.display(), err);
            return cfg;
        }
    }

    tracing::info!("config: resolved target={} app={}", cfg.target, cfg.app);
    cfg
}

/// Look up a single key in an arbitrary config file.
///
/// Returns `None` when the file or the key is absent; a read failure on an
/// existing file is logged and treated the same as absence.
pub async fn lookup_config_value(path: &Path, key: &str) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match tokio::fs::read_to_string(path).await {
        Ok(content) => scan_for_key(&content, key),
        Err(err) => {
            tracing::error!("config: failed to read {}: {}", path.display(), err);
            None
        }
    }
}
