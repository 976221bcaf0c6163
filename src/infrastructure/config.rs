// src/infrastructure/config.rs
use crate::constants::POPUP_DISMISS_MS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const APP_DIR: &str = "notecase";
const CONFIG_FILE: &str = "config.toml";

/// TOML configuration for notecase
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Empty means the platform data directory
    #[serde(default)]
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PopupConfig {
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Empty means the current directory
    #[serde(default)]
    pub output_dir: String,
}

fn default_dismiss_after_ms() -> u64 { POPUP_DISMISS_MS }

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load an explicit file, else the default location if it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Resolve where notes live: explicit override, then config, then platform default
    pub fn data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if !self.storage.data_dir.is_empty() {
            return Ok(PathBuf::from(&self.storage.data_dir));
        }
        let base = dirs::data_dir().context("Could not find data directory")?;
        Ok(base.join(APP_DIR))
    }

    pub fn export_dir(&self) -> PathBuf {
        if self.export.output_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.export.output_dir)
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.popup.dismiss_after_ms)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
