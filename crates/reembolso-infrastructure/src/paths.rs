//! Unified path management for reembolso configuration files.
//!
//! All configuration and credentials live under the platform config
//! directory (e.g. `~/.config/reembolso/` on Linux).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for reembolso.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/reembolso/         # Config directory
/// ├── config.toml              # Application configuration (API base URL)
/// └── credentials.json         # Session token and remembered email
/// ```
pub struct ReembolsoPaths;

impl ReembolsoPaths {
    /// Returns the reembolso configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("reembolso"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the credentials file.
    ///
    /// # Security Note
    ///
    /// The file holds the session token in plaintext; it is written with
    /// 600 permissions on Unix.
    pub fn credentials_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("credentials.json"))
    }
}
