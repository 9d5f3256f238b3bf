//! Located entities: products and vendors.
//!
//! Both kinds carry exactly one current [`Coordinates`](crate::coord::Coordinates)
//! pair. A product names its owning vendor; a vendor lists the ids of the
//! products it owns.

mod kind;
mod record;

pub use kind::{EntityId, EntityKind, UnknownKind};
pub use record::{LocatedEntity, Product, Vendor};
