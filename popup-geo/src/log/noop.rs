//! Logger that drops everything.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Discards every message. The default logger of a bare
/// [`GeoLocationIndex`](crate::location::GeoLocationIndex).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpLogger>();
    }

    #[test]
    fn test_noop_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(NoOpLogger);
        logger.info(format_args!("vendor {} moved", "v-1"));
        logger.error(format_args!("store down"));
    }
}
