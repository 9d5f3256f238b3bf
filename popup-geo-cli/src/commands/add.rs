//! `popup-geo add`: register a product or vendor.

use clap::Subcommand;
use popup_geo::coord::Coordinates;
use popup_geo::entity::{LocatedEntity, Product, Vendor};

use super::common::describe;
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Subcommand)]
pub enum AddCommands {
    /// Register a product owned by an existing vendor
    Product {
        id: String,

        #[arg(long)]
        name: String,

        /// Owning vendor id
        #[arg(long)]
        vendor: String,

        /// Location as lon,lat
        #[arg(long, allow_hyphen_values = true)]
        at: Coordinates,

        #[arg(long, default_value_t = 0.0)]
        price: f64,

        #[arg(long, default_value_t = 0)]
        quantity: u32,
    },

    /// Register a vendor
    Vendor {
        id: String,

        #[arg(long)]
        name: String,

        /// Location as lon,lat
        #[arg(long, allow_hyphen_values = true)]
        at: Coordinates,
    },
}

/// Build the record described by the arguments.
pub fn build_entity(command: AddCommands) -> Result<LocatedEntity, CliError> {
    match command {
        AddCommands::Product {
            id,
            name,
            vendor,
            at,
            price,
            quantity,
        } => {
            if !price.is_finite() || price < 0.0 {
                return Err(CliError::InvalidArgument(format!(
                    "price must be a non-negative number, got {}",
                    price
                )));
            }
            Ok(Product::new(id, name, vendor, at)
                .with_price(price)
                .with_quantity(quantity)
                .into())
        }
        AddCommands::Vendor { id, name, at } => Ok(Vendor::new(id, name, at).into()),
    }
}

pub async fn run(runner: &CliRunner, command: AddCommands) -> Result<(), CliError> {
    let entity = build_entity(command)?;
    let stored = runner
        .call("add", runner.index().register(entity))
        .await?;
    runner.save()?;

    println!("Added {}", describe(&stored));
    Ok(())
}
