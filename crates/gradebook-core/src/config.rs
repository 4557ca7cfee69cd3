//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::SortOrder;

/// Name of the project-local config file.
pub const CONFIG_FILE_NAME: &str = "gradebook.toml";

/// Environment variable that overrides `data_file`.
pub const DATA_FILE_ENV: &str = "GRADEBOOK_DATA_FILE";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Roster data file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Sort direction used when `sort` is given no explicit order.
    #[serde(default)]
    pub default_sort: SortOrder,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("studentMarks.txt")
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_sort: SortOrder::default(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable override: `GRADEBOOK_DATA_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            // Relative data paths are relative to the config file, not the cwd.
            if config.data_file.is_relative() {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    config.data_file = dir.join(&config.data_file);
                }
            }
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => GradebookConfig::default(),
    };

    if let Some(data_file) = std::env::var_os(DATA_FILE_ENV).filter(|v| !v.is_empty()) {
        config.data_file = PathBuf::from(data_file);
    }

    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config_str(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
