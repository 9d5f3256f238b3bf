//! `popup-geo remove`: delete an entity and its location.

use clap::Args;
use popup_geo::entity::{EntityId, EntityKind, LocatedEntity};

use super::common::{describe, KindArg};
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(value_enum)]
    pub kind: KindArg,

    pub id: String,
}

pub async fn run(runner: &CliRunner, args: RemoveArgs) -> Result<(), CliError> {
    let id = EntityId::new(args.id);
    let removed = runner
        .call(
            "remove",
            runner.index().remove(EntityKind::from(args.kind), &id),
        )
        .await?;
    runner.save()?;

    println!("Removed {}", describe(&removed));
    if let LocatedEntity::Vendor(vendor) = &removed {
        if !vendor.products.is_empty() {
            println!("  along with {} product(s)", vendor.products.len());
        }
    }
    Ok(())
}
