//! GeoLocationIndex: point locations and proximity queries for products
//! and vendors.
//!
//! The index is a thin, stateless layer over a [`SpatialStore`]. It checks
//! inputs before any store round trip, converts radii from kilometers to
//! meters and translates store failures into [`LocationError`]s. The store
//! keeps all state, so an index can be cloned freely.
//!
//! # Containment
//!
//! A point is within a radius when its great-circle distance from the
//! origin is less than or equal to it. Radius 0 therefore matches entities
//! located exactly at the origin.
//!
//! # Ordering
//!
//! [`find_nearby`](GeoLocationIndex::find_nearby) makes no ordering promise.
//! Callers needing nearest-first use
//! [`find_nearby_ranked`](GeoLocationIndex::find_nearby_ranked).

use std::collections::HashMap;
use std::sync::Arc;

use super::error::{LocationError, LocationResult};
use super::types::{LocationStats, NearbyProduct, RankedEntity};
use crate::coord::{self, km_to_meters, Coordinates};
use crate::entity::{EntityId, EntityKind, LocatedEntity, Product, Vendor};
use crate::log::{Logger, NoOpLogger};
use crate::store::SpatialStore;
use crate::{log_debug, log_trace, log_warn};

/// Location index over a spatial store.
///
/// # Example
///
/// ```
/// use popup_geo::coord::Coordinates;
/// use popup_geo::entity::{EntityKind, Vendor};
/// use popup_geo::location::GeoLocationIndex;
/// use popup_geo::store::MemorySpatialStore;
/// use std::sync::Arc;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let index = GeoLocationIndex::new(Arc::new(MemorySpatialStore::new()));
/// index
///     .register(Vendor::new("v-1", "Market Stall", Coordinates::new(-0.08, 51.51)))
///     .await
///     .unwrap();
///
/// let nearby = index
///     .find_nearby(EntityKind::Vendor, Coordinates::new(-0.09, 51.50), 2.0)
///     .await
///     .unwrap();
/// assert_eq!(nearby.len(), 1);
/// # });
/// ```
pub struct GeoLocationIndex<S: SpatialStore> {
    store: Arc<S>,
    logger: Arc<dyn Logger>,
}

impl<S: SpatialStore> Clone for GeoLocationIndex<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            logger: Arc::clone(&self.logger),
        }
    }
}

fn check_radius(radius_km: f64) -> LocationResult<()> {
    if radius_km.is_nan() || radius_km < 0.0 {
        return Err(LocationError::InvalidRadius(radius_km));
    }
    Ok(())
}

impl<S: SpatialStore> GeoLocationIndex<S> {
    /// Create an index over `store` that discards its log output.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// The underlying store handle.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    fn report(&self, op: &str, err: LocationError) -> LocationError {
        match &err {
            LocationError::StoreUnavailable(reason) => {
                log_warn!(self.logger, "{} failed: store unavailable: {}", op, reason)
            }
            other => log_debug!(self.logger, "{} rejected: {}", op, other),
        }
        err
    }

    /// Create an entity with its initial location.
    ///
    /// A product must name an existing vendor; it is appended to that
    /// vendor's product list.
    pub async fn register(&self, entity: impl Into<LocatedEntity>) -> LocationResult<LocatedEntity> {
        let entity = entity.into();
        if let Err(e) = entity.location().validate() {
            return Err(self.report("register", e.into()));
        }

        let (kind, id) = (entity.kind(), entity.id().clone());
        let stored = self
            .store
            .insert(entity)
            .await
            .map_err(|e| self.report("register", e.into()))?;

        log_debug!(self.logger, "registered {} '{}' at {}", kind, id, stored.location());
        Ok(stored)
    }

    /// Fetch one entity.
    pub async fn get(&self, kind: EntityKind, id: &EntityId) -> LocationResult<LocatedEntity> {
        self.store
            .get(kind, id)
            .await
            .map_err(|e| self.report("get", e.into()))?
            .ok_or_else(|| LocationError::NotFound {
                kind,
                id: id.clone(),
            })
    }

    /// Overwrite the stored coordinate pair of an entity.
    ///
    /// The pair is replaced as a whole; there is no partial update. Racing
    /// relocations of the same entity resolve last-write-wins.
    pub async fn relocate(
        &self,
        kind: EntityKind,
        id: &EntityId,
        coordinates: Coordinates,
    ) -> LocationResult<LocatedEntity> {
        if let Err(e) = coordinates.validate() {
            return Err(self.report("relocate", e.into()));
        }

        let updated = self
            .store
            .update(kind, id, coordinates)
            .await
            .map_err(|e| self.report("relocate", e.into()))?;

        log_debug!(self.logger, "relocated {} '{}' to {}", kind, id, coordinates);
        Ok(updated)
    }

    /// Every entity of `kind` within `radius_km` of `origin`, unordered.
    pub async fn find_nearby(
        &self,
        kind: EntityKind,
        origin: Coordinates,
        radius_km: f64,
    ) -> LocationResult<Vec<LocatedEntity>> {
        if let Err(e) = check_radius(radius_km) {
            return Err(self.report("find_nearby", e));
        }
        if let Err(e) = origin.validate() {
            return Err(self.report("find_nearby", e.into()));
        }

        let hits = self
            .store
            .find_by_radius(kind, origin, km_to_meters(radius_km))
            .await
            .map_err(|e| self.report("find_nearby", e.into()))?;

        log_trace!(
            self.logger,
            "{} {} within {} km of {}",
            hits.len(),
            kind,
            radius_km,
            origin
        );
        Ok(hits)
    }

    /// Products within `radius_km` of `origin`, each with its owning vendor.
    ///
    /// Every distinct vendor is fetched once, whatever the number of its
    /// products among the hits.
    pub async fn find_nearby_products(
        &self,
        origin: Coordinates,
        radius_km: f64,
    ) -> LocationResult<Vec<NearbyProduct>> {
        let products: Vec<Product> = self
            .find_nearby(EntityKind::Product, origin, radius_km)
            .await?
            .into_iter()
            .filter_map(LocatedEntity::into_product)
            .collect();

        let mut owners: HashMap<EntityId, Option<Vendor>> = HashMap::new();
        for product in &products {
            if owners.contains_key(&product.vendor) {
                continue;
            }
            let owner = self
                .store
                .get(EntityKind::Vendor, &product.vendor)
                .await
                .map_err(|e| self.report("find_nearby_products", e.into()))?
                .and_then(LocatedEntity::into_vendor);
            owners.insert(product.vendor.clone(), owner);
        }

        Ok(products
            .into_iter()
            .map(|product| NearbyProduct {
                vendor: owners.get(&product.vendor).cloned().flatten(),
                product,
            })
            .collect())
    }

    pub async fn find_nearby_vendors(
        &self,
        origin: Coordinates,
        radius_km: f64,
    ) -> LocationResult<Vec<Vendor>> {
        Ok(self
            .find_nearby(EntityKind::Vendor, origin, radius_km)
            .await?
            .into_iter()
            .filter_map(LocatedEntity::into_vendor)
            .collect())
    }

    /// Like [`find_nearby`](Self::find_nearby), sorted nearest first.
    /// Equal distances are ordered by id.
    pub async fn find_nearby_ranked(
        &self,
        kind: EntityKind,
        origin: Coordinates,
        radius_km: f64,
    ) -> LocationResult<Vec<RankedEntity>> {
        let mut ranked: Vec<RankedEntity> = self
            .find_nearby(kind, origin, radius_km)
            .await?
            .into_iter()
            .map(|entity| RankedEntity {
                distance_km: coord::distance_km(origin, entity.location()),
                entity,
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.entity.id().cmp(b.entity.id()))
        });
        Ok(ranked)
    }

    /// Delete an entity together with its location. Removing a vendor also
    /// removes its products.
    pub async fn remove(&self, kind: EntityKind, id: &EntityId) -> LocationResult<LocatedEntity> {
        let removed = self
            .store
            .remove(kind, id)
            .await
            .map_err(|e| self.report("remove", e.into()))?;
        log_debug!(self.logger, "removed {} '{}'", kind, id);
        Ok(removed)
    }

    /// Great-circle distance in kilometers. See [`coord::distance_km`].
    pub fn distance_km(&self, a: Coordinates, b: Coordinates) -> f64 {
        coord::distance_km(a, b)
    }

    /// Count products and vendors. Both counts are requested concurrently.
    pub async fn stats(&self) -> LocationResult<LocationStats> {
        let (total_products, total_vendors) = tokio::try_join!(
            self.store.count(EntityKind::Product),
            self.store.count(EntityKind::Vendor),
        )
        .map_err(|e| self.report("stats", e.into()))?;

        Ok(LocationStats {
            total_products,
            total_vendors,
        })
    }
}
