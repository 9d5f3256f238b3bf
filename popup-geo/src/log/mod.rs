//! Logging abstraction used by the location index.
//!
//! The index takes an `Arc<dyn Logger>` instead of calling `tracing`
//! directly, so embedders can route its messages anywhere and tests can
//! assert on them.
//!
//! - [`Logger`]: the interface, plus the `log_*!` format macros
//! - [`TracingLogger`]: forwards to `tracing`
//! - [`NoOpLogger`]: discards everything
//! - [`MemoryLogger`]: records messages for inspection
//!
//! ```
//! use popup_geo::coord::Coordinates;
//! use popup_geo::location::GeoLocationIndex;
//! use popup_geo::log::{Logger, TracingLogger};
//! use popup_geo::store::MemorySpatialStore;
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
//! let index = GeoLocationIndex::new(Arc::new(MemorySpatialStore::new())).with_logger(logger);
//! # let _ = index;
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
