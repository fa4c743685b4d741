use crate::core::rates::RateTable;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: "https://api.exchangerate-api.com".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Default display currency; overridable per invocation.
    pub currency: String,
    /// Static fallback rate table, anchored to the base currency. Live rates
    /// are merged on top of it, so this is also where the Gold/Silver spot
    /// prices live when no metals feed is available.
    #[serde(default)]
    pub rates: RateTable,
    /// Live FX provider; omit to run fully offline on the static rates.
    #[serde(default)]
    pub provider: Option<ProviderConfig>,
    /// Custom snapshot file location.
    pub snapshot_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "nwt", "nwt")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_snapshot_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "nwt", "nwt")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().join("snapshot.yaml"))
    }

    /// Snapshot file location, honoring the configured override.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.snapshot_path {
            return Ok(PathBuf::from(custom_path));
        }
        Self::default_snapshot_path()
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
