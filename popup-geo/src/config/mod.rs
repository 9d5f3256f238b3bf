//! User configuration stored in ~/.popup-geo/config.ini.
//!
//! ```ini
//! [store]
//! data_file = ~/.popup-geo/inventory.json
//! timeout_secs = 5
//!
//! [query]
//! default_radius_km = 10
//! nearest_first = false
//!
//! [logging]
//! file = ~/.popup-geo/popup-geo.log
//! ```
//!
//! # Example
//!
//! ```
//! use popup_geo::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "query.default_radius_km".parse().unwrap();
//! key.set(&mut config, "2.5").unwrap();
//! assert_eq!(config.query.default_radius_km, 2.5);
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_data_file, default_log_path, DEFAULT_DATA_FILE_NAME, DEFAULT_NEAREST_FIRST,
    DEFAULT_RADIUS_KM, DEFAULT_STORE_TIMEOUT_SECS,
};
pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{LoggingSettings, QuerySettings, StoreSettings};
