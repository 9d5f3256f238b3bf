//! Entity kind and identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two kinds of records that carry a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A product listed by a vendor
    Product,
    /// A vendor owning zero or more products
    Vendor,
}

impl EntityKind {
    /// All kinds, in display order.
    pub const ALL: [EntityKind; 2] = [EntityKind::Product, EntityKind::Vendor];

    /// Lowercase name used in config, CLI and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Vendor => "vendor",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown entity kind '{0}' (expected 'product' or 'vendor')")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" | "products" => Ok(EntityKind::Product),
            "vendor" | "vendors" => Ok(EntityKind::Vendor),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Opaque entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("product".parse::<EntityKind>(), Ok(EntityKind::Product));
        assert_eq!("Vendors".parse::<EntityKind>(), Ok(EntityKind::Vendor));
        assert_eq!(
            "order".parse::<EntityKind>(),
            Err(UnknownKind("order".to_string()))
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::Product.to_string(), "product");
        assert_eq!(EntityKind::Vendor.to_string(), "vendor");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&EntityKind::Vendor).unwrap();
        assert_eq!(json, "\"vendor\"");
    }

    #[test]
    fn test_id_is_transparent() {
        let id = EntityId::new("p-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");
        assert_eq!(id.as_str(), "p-1");
        assert_eq!(id, EntityId::from("p-1"));
    }
}
