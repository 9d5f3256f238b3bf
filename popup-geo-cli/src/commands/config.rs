//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, `config path` and
//! `config init` for viewing and modifying settings from the command line.

use clap::Subcommand;
use popup_geo::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., query.default_radius_km)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., query.default_radius_km)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key),
        ConfigCommands::Set { key, value } => run_set(&key, &value),
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Init => run_init(),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'popup-geo config list' to see available keys.",
            key
        ))
    })
}

fn run_get(key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = ConfigFile::load()?;
    println!("{}", config_key.get(&config));
    Ok(())
}

fn run_set(key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let mut config = ConfigFile::load()?;
    config_key
        .set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save()?;

    println!("Set {} = {}", config_key.name(), value);
    Ok(())
}

/// Print every key grouped by section.
pub fn format_listing(config: &ConfigFile) -> String {
    let mut out = String::new();
    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();
        if section != current_section {
            if !current_section.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", section));
            current_section = section;
        }
        out.push_str(&format!("  {} = {}\n", key.key_name(), key.get(config)));
    }

    out
}

fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    print!("{}", format_listing(&config));
    Ok(())
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

fn run_init() -> Result<(), CliError> {
    let path = config_file_path();
    let existed = path.exists();
    ConfigFile::ensure_exists()?;

    if existed {
        println!("Configuration already exists at {}", path.display());
    } else {
        println!("Created {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_groups_sections() {
        let listing = format_listing(&ConfigFile::default());
        assert!(listing.starts_with("[store]\n"));
        assert!(listing.contains("\n[query]\n"));
        assert!(listing.contains("\n[logging]\n"));
        assert!(listing.contains("  timeout_secs = "));
        assert!(listing.contains("  nearest_first = false"));
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(parse_key("store.nope"), Err(CliError::Config(_))));
    }
}
