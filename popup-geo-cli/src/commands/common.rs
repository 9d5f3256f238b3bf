//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use popup_geo::entity::{EntityKind, LocatedEntity};
use popup_geo::location::RankedEntity;
use serde::Serialize;

use crate::error::CliError;

/// Entity kind selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum KindArg {
    /// Products listed by vendors
    #[value(alias = "products")]
    Product,
    /// Vendors
    #[value(alias = "vendors")]
    Vendor,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Product => EntityKind::Product,
            KindArg::Vendor => EntityKind::Vendor,
        }
    }
}

/// One-line description of an entity.
pub fn describe(entity: &LocatedEntity) -> String {
    match entity {
        LocatedEntity::Product(p) => format!(
            "product {} \"{}\" at {} (vendor {}, price {:.2}, qty {})",
            p.id, p.name, p.location, p.vendor, p.price, p.quantity
        ),
        LocatedEntity::Vendor(v) => format!(
            "vendor {} \"{}\" at {} ({} products)",
            v.id,
            v.name,
            v.location,
            v.products.len()
        ),
    }
}

/// Ranked hit with its distance prefixed.
pub fn describe_ranked(ranked: &RankedEntity) -> String {
    format!("{:>9.3} km  {}", ranked.distance_km, describe(&ranked.entity))
}

/// Pretty JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::InvalidArgument(format!("cannot render JSON: {}", e)))?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use popup_geo::coord::Coordinates;
    use popup_geo::entity::{Product, Vendor};

    #[test]
    fn test_kind_arg_converts() {
        assert_eq!(EntityKind::from(KindArg::Product), EntityKind::Product);
        assert_eq!(EntityKind::from(KindArg::Vendor), EntityKind::Vendor);
    }

    #[test]
    fn test_kind_arg_accepts_plural() {
        assert_eq!(KindArg::from_str("vendors", true), Ok(KindArg::Vendor));
    }

    #[test]
    fn test_describe_product() {
        let p = Product::new("p-1", "Scarf", "v-1", Coordinates::new(12.5, 41.9))
            .with_price(15.0)
            .with_quantity(2);
        assert_eq!(
            describe(&p.into()),
            "product p-1 \"Scarf\" at 12.5,41.9 (vendor v-1, price 15.00, qty 2)"
        );
    }

    #[test]
    fn test_describe_ranked() {
        let ranked = RankedEntity {
            entity: Vendor::new("v-1", "Cart", Coordinates::new(0.0, 0.0)).into(),
            distance_km: 1.5,
        };
        let line = describe_ranked(&ranked);
        assert!(line.trim_start().starts_with("1.500 km"));
        assert!(line.ends_with("(0 products)"));
    }
}
