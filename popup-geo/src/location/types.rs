//! Result types returned by the location index.

use serde::{Deserialize, Serialize};

use crate::entity::{LocatedEntity, Product, Vendor};

/// Entity counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStats {
    pub total_products: u64,
    pub total_vendors: u64,
}

/// A radius query hit with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntity {
    pub entity: LocatedEntity,
    pub distance_km: f64,
}

/// A product hit together with the vendor that owns it.
///
/// `vendor` is `None` only when the vendor disappeared between the radius
/// query and the lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyProduct {
    pub product: Product,
    pub vendor: Option<Vendor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_camel_case() {
        let stats = LocationStats {
            total_products: 3,
            total_vendors: 2,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"totalProducts":3,"totalVendors":2}"#);
    }
}
