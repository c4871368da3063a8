use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

const CONFIG_DIR: &str = ".dashfilter";

/// Configuration file lookup
pub struct Config;

impl Config {
    fn home_dir() -> Result<PathBuf> {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .context("Failed to determine home directory")
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(CONFIG_DIR).join("rc"))
    }

    /// Get the default snapshot path
    pub fn default_snapshot_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(CONFIG_DIR).join("dashboard.json"))
    }

    /// Get snapshot path from configuration file or default
    pub fn resolve_snapshot_path() -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let config = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
            if let Some(path) = parse_data_location(&config, &config_path) {
                log::debug!("Snapshot location from {}: {}", config_path.display(), path.display());
                return Ok(path);
            }
        }

        Self::default_snapshot_path()
    }
}

/// Find `data.location=` in rc content. Relative paths resolve against the rc file's directory.
fn parse_data_location(config: &str, config_path: &Path) -> Option<PathBuf> {
    for line in config.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if let Some(path_str) = line.strip_prefix("data.location=") {
            let path = PathBuf::from(path_str.trim());
            if path.is_relative() {
                let base = config_path.parent().unwrap_or_else(|| Path::new("."));
                return Some(base.join(path));
            }
            return Some(path);
        }
    }
    None
}
