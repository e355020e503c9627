//! Application configuration file storage.
//!
//! Loads `config.toml` from the platform config directory. The only
//! setting today is the backend API base URL, overridable via the
//! `REEMBOLSO_API_URL` environment variable.

use crate::paths::ReembolsoPaths;
use reembolso_core::{ReembolsoError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const API_URL_ENV: &str = "REEMBOLSO_API_URL";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

/// Storage for the application configuration file (config.toml).
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates storage at the default path (`<config dir>/reembolso/config.toml`).
    pub fn new() -> Result<Self> {
        let path = ReembolsoPaths::config_file()
            .map_err(|err| ReembolsoError::config(err.to_string()))?;
        Ok(Self { path })
    }

    /// Creates storage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration.
    ///
    /// A missing file yields the defaults; the environment variable wins
    /// over the file in either case.
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = if self.path.exists() {
            let content = fs::read_to_string(&self.path)?;
            toml::from_str(&content)?
        } else {
            AppConfig::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        Ok(config)
    }

    /// Saves the configuration, creating the parent directory if needed.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(dir.path().join("config.toml"));
        let config = storage.load().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(dir.path().join("config.toml"));

        let config = AppConfig {
            api_url: "https://reembolso.example.com".to_string(),
        };
        storage.save(&config).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.api_url, "https://reembolso.example.com");
    }

    #[test]
    fn invalid_toml_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = [broken").unwrap();

        let storage = ConfigStorage::with_path(path);
        assert!(matches!(
            storage.load(),
            Err(ReembolsoError::Serialization { .. })
        ));
    }
}
