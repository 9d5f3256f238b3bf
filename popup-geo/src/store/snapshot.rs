//! JSON snapshots of the in-memory store.
//!
//! The CLI keeps its inventory between runs as a single JSON document:
//!
//! ```json
//! {
//!   "vendors": [{ "id": "v-1", "name": "...", "location": { "type": "Point", "coordinates": [2.35, 48.85] }, ... }],
//!   "products": [{ "id": "p-1", "vendor": "v-1", "location": { ... }, ... }]
//! }
//! ```
//!
//! Vendor product lists are rebuilt from the products on load, so a list
//! naming a product that is not in the document is dropped. Products the
//! saved list names keep their saved order; any others follow in document
//! order.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::memory::{MemorySpatialStore, Stamp};
use super::traits::StoreError;
use crate::entity::{EntityKind, LocatedEntity, Product, Vendor};

/// Errors from loading or saving a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but its records do not form a valid store
    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] StoreError),
}

/// Serializable content of a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty() && self.products.is_empty()
    }
}

impl MemorySpatialStore {
    /// Build a store from a snapshot.
    ///
    /// Vendors are inserted before products so every product can find its
    /// owner. Any invalid record, duplicate id or orphan product fails the
    /// whole load. Stored `updated_at` stamps are kept, and each vendor's
    /// product list keeps the order it was saved in.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let store = Self::new();
        let mut orders = Vec::with_capacity(snapshot.vendors.len());
        for vendor in snapshot.vendors {
            orders.push((vendor.id.clone(), vendor.products.clone()));
            store.insert_entity(LocatedEntity::Vendor(vendor), Stamp::Keep)?;
        }
        for product in snapshot.products {
            store.insert_entity(LocatedEntity::Product(product), Stamp::Keep)?;
        }
        for (vendor, order) in orders.iter().filter(|(_, order)| !order.is_empty()) {
            store.order_products(vendor, order)?;
        }
        Ok(store)
    }

    /// Capture the current content, sorted by id.
    pub fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let mut vendors: Vec<Vendor> = self
            .records(EntityKind::Vendor)?
            .into_iter()
            .filter_map(LocatedEntity::into_vendor)
            .collect();
        let mut products: Vec<Product> = self
            .records(EntityKind::Product)?
            .into_iter()
            .filter_map(LocatedEntity::into_product)
            .collect();

        vendors.sort_by(|a, b| a.id.cmp(&b.id));
        products.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(Snapshot { vendors, products })
    }

    /// Load a store from a JSON file. A missing file yields an empty store.
    pub fn load_json(path: &Path) -> Result<Self, SnapshotError> {
        if !path.exists() {
            debug!(path = %path.display(), "No snapshot found, starting empty");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        let (vendors, products) = (snapshot.vendors.len(), snapshot.products.len());
        let store = Self::from_snapshot(snapshot)?;

        info!(
            path = %path.display(),
            vendors,
            products,
            "Snapshot loaded"
        );
        Ok(store)
    }

    /// Write the store to a JSON file, creating parent directories.
    ///
    /// The document is written to a sibling temp file and renamed into
    /// place.
    pub fn save_json(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let snapshot = self.snapshot()?;
        let content = serde_json::to_string_pretty(&snapshot)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;

        debug!(
            path = %path.display(),
            vendors = snapshot.vendors.len(),
            products = snapshot.products.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}
