//! Typed access to configuration values by `section.key` name.
//!
//! Used by `popup-geo config get|set|list`.

use std::str::FromStr;
use thiserror::Error;

use super::file::ConfigFile;
use super::parser::{parse_bool, parse_path, parse_radius, parse_timeout};
use super::writer::path_to_string;

/// Errors from getting or setting a value by key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    StoreDataFile,
    StoreTimeoutSecs,
    QueryDefaultRadiusKm,
    QueryNearestFirst,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "store.data_file" => Ok(ConfigKey::StoreDataFile),
            "store.timeout_secs" => Ok(ConfigKey::StoreTimeoutSecs),
            "query.default_radius_km" => Ok(ConfigKey::QueryDefaultRadiusKm),
            "query.nearest_first" => Ok(ConfigKey::QueryNearestFirst),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Every key, in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::StoreDataFile,
            ConfigKey::StoreTimeoutSecs,
            ConfigKey::QueryDefaultRadiusKm,
            ConfigKey::QueryNearestFirst,
            ConfigKey::LoggingFile,
        ]
    }

    /// Full name (e.g., "store.timeout_secs").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::StoreDataFile => "store.data_file",
            ConfigKey::StoreTimeoutSecs => "store.timeout_secs",
            ConfigKey::QueryDefaultRadiusKm => "query.default_radius_km",
            ConfigKey::QueryNearestFirst => "query.nearest_first",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Section part of the name (e.g., "store").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Key part of the name (e.g., "timeout_secs").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Current value as it would be written to config.ini.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::StoreDataFile => path_to_string(&config.store.data_file),
            ConfigKey::StoreTimeoutSecs => config.store.timeout_secs.to_string(),
            ConfigKey::QueryDefaultRadiusKm => config.query.default_radius_km.to_string(),
            ConfigKey::QueryNearestFirst => config.query.nearest_first.to_string(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
        }
    }

    /// Parse `value` and store it. The config is untouched on error.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let failed = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };

        match self {
            ConfigKey::StoreDataFile => config.store.data_file = parse_path(value).map_err(failed)?,
            ConfigKey::StoreTimeoutSecs => {
                config.store.timeout_secs = parse_timeout(value).map_err(failed)?
            }
            ConfigKey::QueryDefaultRadiusKm => {
                config.query.default_radius_km = parse_radius(value).map_err(failed)?
            }
            ConfigKey::QueryNearestFirst => {
                config.query.nearest_first = parse_bool(value).map_err(failed)?
            }
            ConfigKey::LoggingFile => config.logging.file = parse_path(value).map_err(failed)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_all_names() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>(), Ok(*key));
        }
        assert_eq!(
            "STORE.Timeout_Secs".parse::<ConfigKey>(),
            Ok(ConfigKey::StoreTimeoutSecs)
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            "store.shards".parse::<ConfigKey>(),
            Err(ConfigKeyError::UnknownKey("store.shards".to_string()))
        );
    }

    #[test]
    fn test_section_and_key_name() {
        assert_eq!(ConfigKey::QueryDefaultRadiusKm.section(), "query");
        assert_eq!(ConfigKey::QueryDefaultRadiusKm.key_name(), "default_radius_km");
    }

    #[test]
    fn test_set_then_get() {
        let mut config = ConfigFile::default();
        ConfigKey::StoreTimeoutSecs.set(&mut config, "30").unwrap();
        ConfigKey::QueryNearestFirst.set(&mut config, "on").unwrap();
        ConfigKey::StoreDataFile.set(&mut config, "/tmp/inv.json").unwrap();

        assert_eq!(ConfigKey::StoreTimeoutSecs.get(&config), "30");
        assert_eq!(ConfigKey::QueryNearestFirst.get(&config), "true");
        assert_eq!(config.store.data_file, PathBuf::from("/tmp/inv.json"));
    }

    #[test]
    fn test_invalid_set_leaves_config() {
        let mut config = ConfigFile::default();
        let err = ConfigKey::QueryDefaultRadiusKm
            .set(&mut config, "-1")
            .unwrap_err();
        assert!(matches!(err, ConfigKeyError::ValidationFailed { ref key, .. } if key == "query.default_radius_km"));
        assert_eq!(config, ConfigFile::default());
    }
}
