//! Location service for products and vendors.
//!
//! [`GeoLocationIndex`] keeps one point per entity and answers "what is
//! within N km of here" queries by delegating to a
//! [`SpatialStore`](crate::store::SpatialStore).

mod error;
mod index;
mod types;

pub use error::{LocationError, LocationResult};
pub use index::GeoLocationIndex;
pub use types::{LocationStats, NearbyProduct, RankedEntity};
