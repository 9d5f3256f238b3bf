//! Logger that keeps messages in memory.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;
use std::sync::Mutex;

/// Collects formatted messages for later inspection.
///
/// ```
/// use popup_geo::log::{LogLevel, Logger, MemoryLogger};
/// use popup_geo::log_warn;
///
/// let logger = MemoryLogger::new();
/// log_warn!(logger, "radius {} rejected", -1.0);
/// assert!(logger.contains(LogLevel::Warn, "rejected"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded entry, oldest first.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// True if an entry at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        match self.entries.lock() {
            Ok(mut entries) => entries.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let message = args.to_string();
        match self.entries.lock() {
            Ok(mut entries) => entries.push((level, message)),
            Err(poisoned) => poisoned.into_inner().push((level, message)),
        }
    }
}
