//! Errors surfaced by the location index.

use thiserror::Error;

use crate::coord::CoordError;
use crate::entity::{EntityId, EntityKind};
use crate::store::StoreError;

/// Failure of a [`GeoLocationIndex`](super::GeoLocationIndex) operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// No entity of this kind has the id
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: EntityId },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(#[from] CoordError),

    /// The store could not be reached or failed internally
    #[error("Location store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid radius: {0} km (must be a non-negative number)")]
    InvalidRadius(f64),

    #[error("{kind} '{id}' already exists")]
    Duplicate { kind: EntityKind, id: EntityId },

    #[error("Invalid price for product '{id}': {price} (must be a non-negative number)")]
    InvalidPrice { id: EntityId, price: f64 },
}

impl From<StoreError> for LocationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, id } => LocationError::NotFound { kind, id },
            StoreError::InvalidCoordinates(e) => LocationError::InvalidCoordinates(e),
            StoreError::Duplicate { kind, id } => LocationError::Duplicate { kind, id },
            StoreError::Unavailable(reason) => LocationError::StoreUnavailable(reason),
            StoreError::InvalidPrice { id, price } => LocationError::InvalidPrice { id, price },
        }
    }
}

/// Result alias for index operations.
pub type LocationResult<T> = Result<T, LocationError>;
