use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::APP_PREFIX;

/// Default number of entries kept in the recent files list.
pub const DEFAULT_MAX_ENTRIES: usize = 5;

/// Default logical path of the persisted list, resolved through a `FileStore`.
pub const DEFAULT_LIST_PATH: &str = "data/recentfiles";

/// Global configuration loaded from `~/.config/recents/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentsConfig {
    /// Maximum number of recent files that are stored and read back.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Logical path of the list file (relative to the file store root).
    #[serde(default = "default_list_path")]
    pub list_path: String,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_list_path() -> String {
    DEFAULT_LIST_PATH.to_string()
}

impl Default for RecentsConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            list_path: DEFAULT_LIST_PATH.to_string(),
        }
    }
}

impl RecentsConfig {
    fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            anyhow::bail!("max_entries must be at least 1");
        }
        if self.list_path.trim().is_empty() {
            anyhow::bail!("list_path must not be empty");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RecentsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RecentsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<RecentsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RecentsConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
