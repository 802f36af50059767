use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::metrics_log::DEFAULT_LOG_FILE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Where metric lines are appended
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    /// Probe vendor GPU libraries at startup
    #[serde(default = "default_true")]
    pub gpu_enabled: bool,
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_true() -> bool {
    true
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            gpu_enabled: true,
        }
    }
}

impl MonitorConfig {
    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::debug!("{:#}, using default config", e);
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit file.
    ///
    /// Missing or empty files give the defaults. A file that does not parse
    /// also gives the defaults, with a warning.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid config file {:?}: {}", path, e);
            Self::default()
        }))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("sysmon").join("config.json"))
    }

    pub fn set_log_path(&mut self, path: PathBuf) {
        self.log_path = path;
    }
}
