//! Settings structs, one per `[section]` of config.ini.

use std::path::PathBuf;
use std::time::Duration;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub store: StoreSettings,
    pub query: QuerySettings,
    pub logging: LoggingSettings,
}

/// `[store]`: where the inventory snapshot lives and how long to wait on it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Inventory snapshot (JSON)
    pub data_file: PathBuf,
    /// Per-operation deadline applied by the CLI, in seconds
    pub timeout_secs: u64,
}

/// `[query]`: defaults for `nearby`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySettings {
    pub default_radius_km: f64,
    /// Sort nearby results by distance unless overridden
    pub nearest_first: bool,
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub file: PathBuf,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
