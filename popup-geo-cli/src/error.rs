//! CLI error handling with user-friendly messages.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error,
//! adds a hint where one helps, and exits with status 1.

use std::fmt;
use std::path::PathBuf;
use std::process;

use popup_geo::config::ConfigFileError;
use popup_geo::location::LocationError;
use popup_geo::store::SnapshotError;

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Bad configuration key or value
    Config(String),
    /// Config file could not be read or written
    ConfigFile(ConfigFileError),
    /// Inventory snapshot could not be loaded or saved
    Snapshot { path: PathBuf, error: SnapshotError },
    /// The location index rejected or failed the operation
    Location(LocationError),
    /// The operation did not finish within `store.timeout_secs`
    Timeout { operation: String, secs: u64 },
    /// Arguments that parse but make no sense together
    InvalidArgument(String),
}

impl CliError {
    /// Print the error (with a hint where useful) and exit with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Snapshot {
                path,
                error: SnapshotError::Json(_) | SnapshotError::Invalid(_),
            } => {
                eprintln!();
                eprintln!("The inventory file {} is not a valid snapshot.", path.display());
                eprintln!("Fix or move it aside; a missing file starts an empty inventory.");
            }
            CliError::Location(LocationError::NotFound { kind, .. }) => {
                eprintln!();
                eprintln!("Use 'popup-geo nearby {} --at <lon,lat>' to find existing ids.", kind);
            }
            CliError::Location(LocationError::InvalidCoordinates(_)) => {
                eprintln!();
                eprintln!("Coordinates are written lon,lat: longitude in [-180, 180], latitude in [-90, 90].");
            }
            CliError::Timeout { .. } => {
                eprintln!();
                eprintln!("Raise the limit with: popup-geo config set store.timeout_secs <seconds>");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Snapshot { path, error } => {
                write!(f, "Inventory file '{}': {}", path.display(), error)
            }
            CliError::Location(e) => write!(f, "{}", e),
            CliError::Timeout { operation, secs } => {
                write!(f, "{} did not finish within {}s", operation, secs)
            }
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Snapshot { error, .. } => Some(error),
            CliError::Location(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<LocationError> for CliError {
    fn from(e: LocationError) -> Self {
        CliError::Location(e)
    }
}
