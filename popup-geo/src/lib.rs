//! popup-geo - location service for a pop-up inventory backend
//!
//! Keeps a point location for every product and vendor and answers
//! proximity queries against them.
//!
//! # Modules
//!
//! - [`coord`]: GeoJSON-ordered coordinates and haversine distance
//! - [`entity`]: product and vendor records
//! - [`store`]: the [`SpatialStore`](store::SpatialStore) contract and an
//!   in-memory implementation with JSON snapshots
//! - [`location`]: [`GeoLocationIndex`](location::GeoLocationIndex), the
//!   component callers talk to
//! - [`config`], [`log`], [`logging`]: configuration and diagnostics
//!
//! # Example
//!
//! ```
//! use popup_geo::coord::Coordinates;
//! use popup_geo::entity::{EntityKind, Product, Vendor};
//! use popup_geo::location::GeoLocationIndex;
//! use popup_geo::store::MemorySpatialStore;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let index = GeoLocationIndex::new(Arc::new(MemorySpatialStore::new()));
//! let here = Coordinates::new(-73.9857, 40.7484);
//!
//! index.register(Vendor::new("v-1", "Midtown Cart", here)).await.unwrap();
//! index
//!     .register(Product::new("p-1", "Pretzel", "v-1", here).with_price(3.0))
//!     .await
//!     .unwrap();
//!
//! let products = index.find_nearby_products(here, 0.5).await.unwrap();
//! assert_eq!(products[0].product.name, "Pretzel");
//! assert_eq!(products[0].vendor.as_ref().unwrap().name, "Midtown Cart");
//!
//! let stats = index.stats().await.unwrap();
//! assert_eq!((stats.total_products, stats.total_vendors), (1, 1));
//! # });
//! ```

pub mod config;
pub mod coord;
pub mod entity;
pub mod location;
pub mod log;
pub mod logging;
pub mod store;

/// Version of the popup-geo library and CLI.
///
/// Shared across the workspace and injected from `Cargo.toml` at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION.split('.').count(), 3);
    }
}
