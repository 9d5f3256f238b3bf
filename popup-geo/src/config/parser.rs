//! INI parsing: `Ini` → `ConfigFile`.
//!
//! Value parsers here are shared with [`super::keys`] so `config set` and
//! file loading accept exactly the same input.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini`, overlaying present keys on `ConfigFile::default()`.
/// Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [store]
    if let Some(section) = ini.section(Some("store")) {
        if let Some(v) = section.get("data_file") {
            config.store.data_file =
                parse_path(v).map_err(|reason| invalid("store", "data_file", v, reason))?;
        }
        if let Some(v) = section.get("timeout_secs") {
            config.store.timeout_secs =
                parse_timeout(v).map_err(|reason| invalid("store", "timeout_secs", v, reason))?;
        }
    }

    // [query]
    if let Some(section) = ini.section(Some("query")) {
        if let Some(v) = section.get("default_radius_km") {
            config.query.default_radius_km = parse_radius(v)
                .map_err(|reason| invalid("query", "default_radius_km", v, reason))?;
        }
        if let Some(v) = section.get("nearest_first") {
            config.query.nearest_first =
                parse_bool(v).map_err(|reason| invalid("query", "nearest_first", v, reason))?;
        }
    }

    // [logging]
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            config.logging.file =
                parse_path(v).map_err(|reason| invalid("logging", "file", v, reason))?;
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: String) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason,
    }
}

/// Non-empty path with `~/` expanded.
pub(super) fn parse_path(value: &str) -> Result<PathBuf, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("path must not be empty".to_string());
    }
    Ok(expand_tilde(value))
}

/// Whole seconds, at least 1.
pub(super) fn parse_timeout(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err("must be a positive integer (seconds)".to_string()),
        Ok(secs) => Ok(secs),
    }
}

/// Finite, non-negative kilometers.
pub(super) fn parse_radius(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(km) if km.is_finite() && km >= 0.0 => Ok(km),
        _ => Err("must be a non-negative number (kilometers)".to_string()),
    }
}

pub(super) fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err("must be true or false".to_string()),
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
