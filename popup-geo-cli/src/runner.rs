//! CLI runner for common setup and operations.
//!
//! Loads the config, initializes logging, opens the inventory snapshot and
//! wraps index calls in the configured deadline.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use popup_geo::config::ConfigFile;
use popup_geo::location::{GeoLocationIndex, LocationResult};
use popup_geo::log::TracingLogger;
use popup_geo::logging::{init_logging, split_log_path, LoggingGuard};
use popup_geo::store::MemorySpatialStore;

use crate::error::CliError;

/// Index type used by every command.
pub type Index = GeoLocationIndex<MemorySpatialStore>;

/// Runner that owns the CLI lifecycle for store-backed commands.
pub struct CliRunner {
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
    data_file: PathBuf,
    index: Index,
}

impl CliRunner {
    /// Load config, start logging and open the inventory.
    ///
    /// `data_override` replaces `store.data_file` for this run. Console
    /// logging is only enabled with `debug`, so normal output stays clean.
    pub fn with_options(debug: bool, data_override: Option<PathBuf>) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, debug, debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        let data_file = data_override.unwrap_or_else(|| config.store.data_file.clone());
        let index = open_index(&data_file)?;

        Ok(Self {
            logging_guard,
            config,
            data_file,
            index,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("popup-geo v{}", popup_geo::VERSION);
        info!(command, data_file = %self.data_file.display(), "Running command");
    }

    /// Await an index operation under `store.timeout_secs`.
    pub async fn call<T, F>(&self, operation: &str, fut: F) -> Result<T, CliError>
    where
        F: Future<Output = LocationResult<T>>,
    {
        with_deadline(self.config.store.timeout(), operation, fut).await
    }

    /// Write the inventory back to disk after a mutation.
    pub fn save(&self) -> Result<(), CliError> {
        self.index
            .store()
            .save_json(&self.data_file)
            .map_err(|error| CliError::Snapshot {
                path: self.data_file.clone(),
                error,
            })?;
        debug!(path = %self.data_file.display(), "Inventory saved");
        Ok(())
    }
}

/// Load the snapshot at `path` and wrap it in an index that logs through
/// `tracing`.
pub fn open_index(path: &Path) -> Result<Index, CliError> {
    let store = MemorySpatialStore::load_json(path).map_err(|error| CliError::Snapshot {
        path: path.to_path_buf(),
        error,
    })?;
    Ok(GeoLocationIndex::new(Arc::new(store)).with_logger(Arc::new(TracingLogger)))
}

/// Run `fut`, failing with [`CliError::Timeout`] once `limit` elapses.
pub async fn with_deadline<T, F>(limit: Duration, operation: &str, fut: F) -> Result<T, CliError>
where
    F: Future<Output = LocationResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(CliError::from),
        Err(_) => Err(CliError::Timeout {
            operation: operation.to_string(),
            secs: limit.as_secs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popup_geo::coord::Coordinates;
    use popup_geo::entity::{EntityKind, Vendor};
    use popup_geo::location::LocationError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let index = open_index(&temp.path().join("inventory.json")).unwrap();
        assert_eq!(index.stats().await.unwrap().total_vendors, 0);
    }

    #[test]
    fn test_open_corrupt_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inventory.json");
        std::fs::write(&path, "{ \"vendors\": [").unwrap();
        assert!(matches!(open_index(&path), Err(CliError::Snapshot { .. })));
    }

    #[tokio::test]
    async fn test_saved_inventory_reopens() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inventory.json");

        let index = open_index(&path).unwrap();
        index
            .register(Vendor::new("v-1", "Kiosk", Coordinates::new(4.9, 52.37)))
            .await
            .unwrap();
        index.store().save_json(&path).unwrap();

        let reopened = open_index(&path).unwrap();
        let hits = reopened
            .find_nearby(EntityKind::Vendor, Coordinates::new(4.9, 52.37), 0.0)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_expires() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, LocationError>(())
        };
        let err = with_deadline(Duration::from_secs(5), "stats", slow)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Timeout { ref operation, secs: 5 } if operation == "stats"));
    }

    #[tokio::test]
    async fn test_deadline_passes_errors_through() {
        let failing = async { Err::<(), _>(LocationError::InvalidRadius(-1.0)) };
        let err = with_deadline(Duration::from_secs(5), "nearby", failing)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Location(LocationError::InvalidRadius(_))));
    }
}
