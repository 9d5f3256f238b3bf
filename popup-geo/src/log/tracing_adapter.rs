//! Bridge from [`Logger`] to `tracing`.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Forwards messages to the `tracing` macros under the `popup_geo::index`
/// target, so `RUST_LOG=popup_geo::index=debug` isolates index chatter.
///
/// Output only appears once a subscriber is installed, normally via
/// [`init_logging`](crate::logging::init_logging).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "popup_geo::index", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "popup_geo::index", "{}", args),
            LogLevel::Info => tracing::info!(target: "popup_geo::index", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "popup_geo::index", "{}", args),
            LogLevel::Error => tracing::error!(target: "popup_geo::index", "{}", args),
        }
    }
}
