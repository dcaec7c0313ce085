//! Application configuration loaded from TOML

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV_VAR: &str = "RHYTHM_SYNC_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "rhythm-sync.toml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Owner recorded on newly created playlists
    pub owner: String,
    /// Host used when building share links
    pub share_host: String,
    pub initial_volume: f32,
    pub tick_interval_ms: u64,
    /// Delay before the simulated backend reports a source as ready
    pub load_latency_ms: u64,
    /// JSON catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: "You".to_string(),
            share_host: "rhythmsync.example".to_string(),
            initial_volume: crate::model::DEFAULT_VOLUME,
            tick_interval_ms: 1000,
            load_latency_ms: 80,
            catalog_path: None,
            log_dir: PathBuf::from(".logs"),
        }
    }
}

impl AppConfig {
    /// Resolve the config file (`$RHYTHM_SYNC_CONFIG`, then `rhythm-sync.toml`)
    /// and load it. A missing default file yields the defaults; a missing
    /// file named by the environment is an error.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse config")?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self> {
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be greater than zero");
        }
        if self.owner.trim().is_empty() {
            bail!("owner must not be empty");
        }
        if self.share_host.trim().is_empty() {
            bail!("share_host must not be empty");
        }
        if !self.initial_volume.is_finite() {
            self.initial_volume = crate::model::DEFAULT_VOLUME;
        }
        self.initial_volume = self.initial_volume.clamp(0.0, 1.0);
        Ok(self)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }
}
