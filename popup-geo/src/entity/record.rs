//! Located entity records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::{EntityId, EntityKind};
use crate::coord::Coordinates;

/// A product listed by a vendor at a point location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Owning vendor
    pub vendor: EntityId,
    pub price: f64,
    pub quantity: u32,
    pub location: Coordinates,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with zero price and quantity.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        vendor: impl Into<EntityId>,
        location: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vendor: vendor.into(),
            price: 0.0,
            quantity: 0,
            location,
            updated_at: Utc::now(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// A vendor and the ids of the products it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub products: Vec<EntityId>,
    pub location: Coordinates,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    /// Create a vendor with no products.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, location: Coordinates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            products: Vec::new(),
            location,
            updated_at: Utc::now(),
        }
    }
}

/// Any record carrying a geographic coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LocatedEntity {
    Product(Product),
    Vendor(Vendor),
}

impl LocatedEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            LocatedEntity::Product(_) => EntityKind::Product,
            LocatedEntity::Vendor(_) => EntityKind::Vendor,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            LocatedEntity::Product(p) => &p.id,
            LocatedEntity::Vendor(v) => &v.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LocatedEntity::Product(p) => &p.name,
            LocatedEntity::Vendor(v) => &v.name,
        }
    }

    pub fn location(&self) -> Coordinates {
        match self {
            LocatedEntity::Product(p) => p.location,
            LocatedEntity::Vendor(v) => v.location,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            LocatedEntity::Product(p) => p.updated_at,
            LocatedEntity::Vendor(v) => v.updated_at,
        }
    }

    /// Replace the coordinate pair and refresh `updated_at`.
    pub fn relocate(&mut self, location: Coordinates) {
        let now = Utc::now();
        match self {
            LocatedEntity::Product(p) => {
                p.location = location;
                p.updated_at = now;
            }
            LocatedEntity::Vendor(v) => {
                v.location = location;
                v.updated_at = now;
            }
        }
    }

    /// Refresh `updated_at` without other changes.
    pub fn touch(&mut self) {
        let now = Utc::now();
        match self {
            LocatedEntity::Product(p) => p.updated_at = now,
            LocatedEntity::Vendor(v) => v.updated_at = now,
        }
    }

    pub fn as_product(&self) -> Option<&Product> {
        match self {
            LocatedEntity::Product(p) => Some(p),
            LocatedEntity::Vendor(_) => None,
        }
    }

    pub fn as_vendor(&self) -> Option<&Vendor> {
        match self {
            LocatedEntity::Vendor(v) => Some(v),
            LocatedEntity::Product(_) => None,
        }
    }

    pub fn into_product(self) -> Option<Product> {
        match self {
            LocatedEntity::Product(p) => Some(p),
            LocatedEntity::Vendor(_) => None,
        }
    }

    pub fn into_vendor(self) -> Option<Vendor> {
        match self {
            LocatedEntity::Vendor(v) => Some(v),
            LocatedEntity::Product(_) => None,
        }
    }
}

impl From<Product> for LocatedEntity {
    fn from(value: Product) -> Self {
        LocatedEntity::Product(value)
    }
}

impl From<Vendor> for LocatedEntity {
    fn from(value: Vendor) -> Self {
        LocatedEntity::Vendor(value)
    }
}
