use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    model::{City, default_cities},
    provider::open_meteo::{DEFAULT_GEOCODING_URL, DEFAULT_WEATHER_URL},
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// weather_url = "https://api.open-meteo.com/v1/forecast"
///
/// [[cities]]
/// name = "Delhi"
/// latitude = 28.6139
/// longitude = 77.209
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the current-conditions endpoint.
    pub weather_url: String,

    /// Base URL of the geocoding search endpoint.
    pub geocoding_url: String,

    /// Cities shown on the board, in display order.
    pub cities: Vec<City>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            cities: default_cities(),
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config dir, creating parent directories as needed.
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
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Reject URLs that are not http(s) and cities with impossible coordinates.
    pub fn validate(&self) -> Result<()> {
        for url in [&self.weather_url, &self.geocoding_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("'{url}' is not an http(s) URL"));
            }
        }

        for city in &self.cities {
            if !(-90.0..=90.0).contains(&city.latitude) || !(-180.0..=180.0).contains(&city.longitude)
            {
                return Err(anyhow!(
                    "City '{}' has out-of-range coordinates ({}, {})",
                    city.name,
                    city.latitude,
                    city.longitude
                ));
            }
        }

        Ok(())
    }
}
