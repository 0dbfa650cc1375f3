use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Environment variable holding the base URL of the current-weather endpoint.
pub const BASE_URL_VAR: &str = "WEATHER_URL";

/// Suggested base URL offered by `weather --configure`.
pub const OPENWEATHER_CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
/// api_key = "..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// Resolved request target. Missing values are left empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoint {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-cli", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay `WEATHER_URL` and `WEATHER_API_KEY` from the process environment.
    pub fn with_env(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Overlay values returned by `lookup`; a returned value wins over the file.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(BASE_URL_VAR) {
            self.base_url = Some(url);
        }
        if let Some(key) = lookup(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        self
    }

    /// Resolve the request target. Nothing is validated here: an absent key
    /// or URL surfaces later as a rejected or failed request.
    pub fn endpoint(&self) -> Endpoint {
        if self.base_url.is_none() {
            tracing::warn!("{BASE_URL_VAR} is not set and no base_url is configured");
        }
        if self.api_key.is_none() {
            tracing::warn!("{API_KEY_VAR} is not set and no api_key is configured");
        }

        Endpoint {
            base_url: self.base_url.clone().unwrap_or_default(),
            api_key: self.api_key.clone().unwrap_or_default(),
        }
    }
}
