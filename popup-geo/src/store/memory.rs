//! In-memory spatial store.
//!
//! Each kind lives in its own table behind a `RwLock`. A table holds the
//! records by id and a cell index mapping every occupied [`GeoCell`] to the
//! ids inside it. Radius queries visit only the cells overlapping the query
//! cap, falling back to a full scan when the cover is larger than the set of
//! occupied cells.
//!
//! # Lock ordering
//!
//! Operations that touch both kinds take the vendor table first, then the
//! product table.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use super::cell::{CellCover, GeoCell};
use super::traits::{SpatialStore, StoreError, StoreResult};
use crate::coord::{distance_m, Coordinates, METERS_PER_KM};
use crate::entity::{EntityId, EntityKind, LocatedEntity};

/// Records of one kind plus their cell index.
#[derive(Debug, Default)]
pub(super) struct KindTable {
    records: HashMap<EntityId, LocatedEntity>,
    cells: HashMap<GeoCell, HashSet<EntityId>>,
}

impl KindTable {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn contains(&self, id: &EntityId) -> bool {
        self.records.contains_key(id)
    }

    fn get(&self, id: &EntityId) -> Option<&LocatedEntity> {
        self.records.get(id)
    }

    fn get_mut(&mut self, id: &EntityId) -> Option<&mut LocatedEntity> {
        self.records.get_mut(id)
    }

    /// Insert a record whose id is known to be absent.
    fn put(&mut self, entity: LocatedEntity) {
        let cell = GeoCell::from_coordinates(entity.location());
        self.cells
            .entry(cell)
            .or_default()
            .insert(entity.id().clone());
        self.records.insert(entity.id().clone(), entity);
    }

    fn take(&mut self, id: &EntityId) -> Option<LocatedEntity> {
        let entity = self.records.remove(id)?;
        self.unlink(GeoCell::from_coordinates(entity.location()), id);
        Some(entity)
    }

    fn unlink(&mut self, cell: GeoCell, id: &EntityId) {
        if let Some(ids) = self.cells.get_mut(&cell) {
            ids.remove(id);
            if ids.is_empty() {
                self.cells.remove(&cell);
            }
        }
    }

    /// Move a record to a new point, keeping the cell index in step.
    fn relocate(&mut self, id: &EntityId, point: Coordinates) -> Option<LocatedEntity> {
        let old_cell = GeoCell::from_coordinates(self.records.get(id)?.location());
        let new_cell = GeoCell::from_coordinates(point);

        if old_cell != new_cell {
            self.unlink(old_cell, id);
            self.cells.entry(new_cell).or_default().insert(id.clone());
        }

        let entity = self.records.get_mut(id)?;
        entity.relocate(point);
        Some(entity.clone())
    }

    fn within(&self, origin: Coordinates, max_distance_m: f64) -> Vec<LocatedEntity> {
        let cover = CellCover::around(origin, max_distance_m / METERS_PER_KM);
        let hit = |entity: &&LocatedEntity| distance_m(origin, entity.location()) <= max_distance_m;

        if cover.len() > self.cells.len() {
            trace!(
                cover = cover.len(),
                occupied = self.cells.len(),
                "Radius query using full scan"
            );
            return self.records.values().filter(hit).cloned().collect();
        }

        cover
            .iter()
            .filter_map(|cell| self.cells.get(&cell))
            .flat_map(|ids| ids.iter())
            .filter_map(|id| self.records.get(id))
            .filter(hit)
            .cloned()
            .collect()
    }

    fn values(&self) -> impl Iterator<Item = &LocatedEntity> {
        self.records.values()
    }
}

/// Spatial store holding every record in process memory.
///
/// # Example
///
/// ```
/// use popup_geo::coord::Coordinates;
/// use popup_geo::entity::{EntityKind, Vendor};
/// use popup_geo::store::{MemorySpatialStore, SpatialStore};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let store = MemorySpatialStore::new();
/// let stall = Vendor::new("v-1", "Stall", Coordinates::new(2.35, 48.85));
/// store.insert(stall.into()).await.unwrap();
///
/// let hits = store
///     .find_by_radius(EntityKind::Vendor, Coordinates::new(2.36, 48.86), 5_000.0)
///     .await
///     .unwrap();
/// assert_eq!(hits.len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemorySpatialStore {
    products: RwLock<KindTable>,
    vendors: RwLock<KindTable>,
}

fn poisoned(kind: EntityKind) -> StoreError {
    StoreError::Unavailable(format!("{} table lock poisoned", kind))
}

fn check_point(point: Coordinates) -> StoreResult<()> {
    Ok(point.validate()?)
}

fn check_record(entity: &LocatedEntity) -> StoreResult<()> {
    check_point(entity.location())?;
    if let LocatedEntity::Product(product) = entity {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(StoreError::InvalidPrice {
                id: product.id.clone(),
                price: product.price,
            });
        }
    }
    Ok(())
}

/// How an insert treats `updated_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stamp {
    /// Set the record, and a vendor gaining a product, to now
    Refresh,
    /// Keep the stamps the records carry
    Keep,
}

impl MemorySpatialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, kind: EntityKind) -> &RwLock<KindTable> {
        match kind {
            EntityKind::Product => &self.products,
            EntityKind::Vendor => &self.vendors,
        }
    }

    pub(super) fn read(&self, kind: EntityKind) -> StoreResult<RwLockReadGuard<'_, KindTable>> {
        self.table(kind).read().map_err(|_| poisoned(kind))
    }

    pub(super) fn write(&self, kind: EntityKind) -> StoreResult<RwLockWriteGuard<'_, KindTable>> {
        self.table(kind).write().map_err(|_| poisoned(kind))
    }

    /// Synchronous core of [`SpatialStore::insert`].
    ///
    /// A vendor is stored with an empty product list; its list grows as
    /// products referencing it are inserted.
    pub(super) fn insert_entity(
        &self,
        mut entity: LocatedEntity,
        stamp: Stamp,
    ) -> StoreResult<LocatedEntity> {
        check_record(&entity)?;
        if stamp == Stamp::Refresh {
            entity.touch();
        }

        match entity {
            LocatedEntity::Vendor(mut vendor) => {
                let mut vendors = self.write(EntityKind::Vendor)?;
                if vendors.contains(&vendor.id) {
                    return Err(StoreError::Duplicate {
                        kind: EntityKind::Vendor,
                        id: vendor.id,
                    });
                }
                vendor.products.clear();
                let entity = LocatedEntity::Vendor(vendor);
                vendors.put(entity.clone());
                debug!(id = %entity.id(), "Vendor inserted");
                Ok(entity)
            }
            LocatedEntity::Product(product) => {
                let mut vendors = self.write(EntityKind::Vendor)?;
                let mut products = self.write(EntityKind::Product)?;

                if products.contains(&product.id) {
                    return Err(StoreError::Duplicate {
                        kind: EntityKind::Product,
                        id: product.id,
                    });
                }
                let Some(owner) = vendors.get_mut(&product.vendor) else {
                    return Err(StoreError::NotFound {
                        kind: EntityKind::Vendor,
                        id: product.vendor,
                    });
                };
                if let LocatedEntity::Vendor(vendor) = &mut *owner {
                    vendor.products.push(product.id.clone());
                }
                if stamp == Stamp::Refresh {
                    owner.touch();
                }

                let entity = LocatedEntity::Product(product);
                products.put(entity.clone());
                debug!(id = %entity.id(), "Product inserted");
                Ok(entity)
            }
        }
    }

    /// Sort a vendor's product list to follow `order`. Ids missing from
    /// `order` go last, in their current order.
    pub(super) fn order_products(&self, vendor: &EntityId, order: &[EntityId]) -> StoreResult<()> {
        let mut vendors = self.write(EntityKind::Vendor)?;
        if let Some(LocatedEntity::Vendor(v)) = vendors.get_mut(vendor) {
            let rank = |id: &EntityId| order.iter().position(|o| o == id).unwrap_or(order.len());
            v.products.sort_by_key(|id| rank(id));
        }
        Ok(())
    }

    /// Synchronous core of [`SpatialStore::remove`].
    ///
    /// Removing a product detaches it from its vendor. Removing a vendor
    /// removes every product it owns.
    fn remove_entity(&self, kind: EntityKind, id: &EntityId) -> StoreResult<LocatedEntity> {
        let not_found = || StoreError::NotFound {
            kind,
            id: id.clone(),
        };

        let mut vendors = self.write(EntityKind::Vendor)?;
        let mut products = self.write(EntityKind::Product)?;

        match kind {
            EntityKind::Product => {
                let removed = products.take(id).ok_or_else(not_found)?;
                if let LocatedEntity::Product(p) = &removed {
                    if let Some(owner) = vendors.get_mut(&p.vendor) {
                        if let LocatedEntity::Vendor(vendor) = &mut *owner {
                            vendor.products.retain(|pid| pid != id);
                        }
                        owner.touch();
                    }
                }
                debug!(id = %id, "Product removed");
                Ok(removed)
            }
            EntityKind::Vendor => {
                let removed = vendors.take(id).ok_or_else(not_found)?;
                let owned: Vec<EntityId> = products
                    .values()
                    .filter_map(LocatedEntity::as_product)
                    .filter(|p| &p.vendor == id)
                    .map(|p| p.id.clone())
                    .collect();
                for pid in &owned {
                    products.take(pid);
                }
                debug!(id = %id, products = owned.len(), "Vendor removed");
                Ok(removed)
            }
        }
    }

    fn relocate_entity(
        &self,
        kind: EntityKind,
        id: &EntityId,
        point: Coordinates,
    ) -> StoreResult<LocatedEntity> {
        check_point(point)?;
        let mut table = self.write(kind)?;
        let updated = table.relocate(id, point).ok_or_else(|| StoreError::NotFound {
            kind,
            id: id.clone(),
        })?;
        trace!(kind = %kind, id = %id, point = %point, "Point updated");
        Ok(updated)
    }

    /// Clone every record of one kind.
    pub(super) fn records(&self, kind: EntityKind) -> StoreResult<Vec<LocatedEntity>> {
        Ok(self.read(kind)?.values().cloned().collect())
    }
}

impl SpatialStore for MemorySpatialStore {
    async fn find_by_radius(
        &self,
        kind: EntityKind,
        origin: Coordinates,
        max_distance_m: f64,
    ) -> StoreResult<Vec<LocatedEntity>> {
        // Negative or NaN radius contains nothing
        if max_distance_m.is_nan() || max_distance_m < 0.0 {
            return Ok(Vec::new());
        }
        Ok(self.read(kind)?.within(origin, max_distance_m))
    }

    async fn update(
        &self,
        kind: EntityKind,
        id: &EntityId,
        point: Coordinates,
    ) -> StoreResult<LocatedEntity> {
        self.relocate_entity(kind, id, point)
    }

    async fn count(&self, kind: EntityKind) -> StoreResult<u64> {
        Ok(self.read(kind)?.len() as u64)
    }

    async fn insert(&self, entity: LocatedEntity) -> StoreResult<LocatedEntity> {
        self.insert_entity(entity, Stamp::Refresh)
    }

    async fn remove(&self, kind: EntityKind, id: &EntityId) -> StoreResult<LocatedEntity> {
        self.remove_entity(kind, id)
    }

    async fn get(&self, kind: EntityKind, id: &EntityId) -> StoreResult<Option<LocatedEntity>> {
        Ok(self.read(kind)?.get(id).cloned())
    }
}
