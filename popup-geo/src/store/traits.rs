//! Spatial store abstraction.

use std::future::Future;

use thiserror::Error;

use crate::coord::{CoordError, Coordinates};
use crate::entity::{EntityId, EntityKind, LocatedEntity};

/// Errors raised by a spatial store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record of this kind has the id
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: EntityId },

    /// A write carried a point outside the valid coordinate ranges
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(#[from] CoordError),

    /// A product price that is negative or not a number
    #[error("Invalid price for product '{id}': {price} (must be a non-negative number)")]
    InvalidPrice { id: EntityId, price: f64 },

    /// An insert reused an id already present for the kind
    #[error("{kind} '{id}' already exists")]
    Duplicate { kind: EntityKind, id: EntityId },

    /// The backing store could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistent collections of located entities, one per kind, with a
/// geospatial radius query over each.
///
/// Every operation is asynchronous. Implementations must validate the
/// coordinate ranges on every write and reject out-of-range points with
/// [`StoreError::InvalidCoordinates`].
///
/// Methods return `impl Future + Send` so the index can be driven from a
/// multi-threaded runtime; implementors may simply write `async fn`.
pub trait SpatialStore: Send + Sync {
    /// All records of `kind` whose great-circle distance from `origin` is at
    /// most `max_distance_m` meters. Order is unspecified.
    fn find_by_radius(
        &self,
        kind: EntityKind,
        origin: Coordinates,
        max_distance_m: f64,
    ) -> impl Future<Output = StoreResult<Vec<LocatedEntity>>> + Send;

    /// Replace the point of one record and return the updated record.
    fn update(
        &self,
        kind: EntityKind,
        id: &EntityId,
        point: Coordinates,
    ) -> impl Future<Output = StoreResult<LocatedEntity>> + Send;

    /// Number of records of `kind`.
    fn count(&self, kind: EntityKind) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Insert a new record. Products must reference an existing vendor.
    fn insert(
        &self,
        entity: LocatedEntity,
    ) -> impl Future<Output = StoreResult<LocatedEntity>> + Send;

    /// Remove a record and return it.
    fn remove(
        &self,
        kind: EntityKind,
        id: &EntityId,
    ) -> impl Future<Output = StoreResult<LocatedEntity>> + Send;

    /// Fetch a record by id.
    fn get(
        &self,
        kind: EntityKind,
        id: &EntityId,
    ) -> impl Future<Output = StoreResult<Option<LocatedEntity>>> + Send;
}
