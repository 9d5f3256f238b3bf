//! Configuration file handling for ~/.popup-geo/config.ini.
//!
//! Settings structs live in [`super::settings`], defaults in
//! [`super::defaults`], parsing in [`super::parser`] and serialization in
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load from the default path. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save to a specific path, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Write the default config file unless one already exists.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        Self::ensure_exists_at(&config_file_path())
    }

    /// [`ensure_exists`](Self::ensure_exists) for an explicit path.
    pub fn ensure_exists_at(path: &Path) -> Result<PathBuf, ConfigFileError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }
        Ok(path.to_path_buf())
    }
}

/// The config directory (~/.popup-geo).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".popup-geo")
}

/// The config file (~/.popup-geo/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
