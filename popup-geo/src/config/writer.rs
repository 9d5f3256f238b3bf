//! INI serialization: `ConfigFile` → commented config.ini text.

use std::path::Path;

use super::settings::ConfigFile;

/// Render the config as a commented INI document.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[store]
; Inventory snapshot (JSON). Created on first write.
data_file = {}
; Seconds to wait for a single store operation before giving up (default: 5)
timeout_secs = {}

[query]
; Radius used by `popup-geo nearby` when --radius is not given (default: 10)
default_radius_km = {}
; Sort nearby results by distance, nearest first (default: false)
nearest_first = {}

[logging]
; Log file, truncated at the start of every run
file = {}
"#,
        path_to_string(&config.store.data_file),
        config.store.timeout_secs,
        config.query.default_radius_km,
        config.query.nearest_first,
        path_to_string(&config.logging.file),
    )
}

/// Display a path, collapsing the home directory back to `~`.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
