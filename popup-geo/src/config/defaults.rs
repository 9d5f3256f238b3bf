//! Default values for every configuration setting.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::logging::default_log_file;

/// Snapshot file name inside the config directory.
pub const DEFAULT_DATA_FILE_NAME: &str = "inventory.json";

/// Per-operation store deadline in seconds.
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;

/// Radius used by `nearby` when none is given, in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

pub const DEFAULT_NEAREST_FIRST: bool = false;

/// Default snapshot path (~/.popup-geo/inventory.json).
pub fn default_data_file() -> PathBuf {
    config_directory().join(DEFAULT_DATA_FILE_NAME)
}

/// Default log path (~/.popup-geo/popup-geo.log).
pub fn default_log_path() -> PathBuf {
    config_directory().join(default_log_file())
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            store: StoreSettings::default(),
            query: QuerySettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_RADIUS_KM,
            nearest_first: DEFAULT_NEAREST_FIRST,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.store.timeout_secs, 5);
        assert_eq!(config.query.default_radius_km, 10.0);
        assert!(!config.query.nearest_first);
        assert!(config.store.data_file.ends_with(".popup-geo/inventory.json"));
        assert!(config.logging.file.ends_with(".popup-geo/popup-geo.log"));
    }

    #[test]
    fn test_timeout_duration() {
        let store = StoreSettings::default();
        assert_eq!(store.timeout().as_secs(), DEFAULT_STORE_TIMEOUT_SECS);
    }
}
