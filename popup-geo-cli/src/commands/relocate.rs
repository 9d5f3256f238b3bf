//! `popup-geo relocate`: move an entity to a new point.

use clap::Args;
use popup_geo::coord::Coordinates;
use popup_geo::entity::{EntityId, EntityKind};

use super::common::{describe, KindArg};
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Args)]
pub struct RelocateArgs {
    #[arg(value_enum)]
    pub kind: KindArg,

    pub id: String,

    /// New location as lon,lat
    #[arg(long, allow_hyphen_values = true)]
    pub at: Coordinates,
}

pub async fn run(runner: &CliRunner, args: RelocateArgs) -> Result<(), CliError> {
    let id = EntityId::new(args.id);
    let updated = runner
        .call(
            "relocate",
            runner
                .index()
                .relocate(EntityKind::from(args.kind), &id, args.at),
        )
        .await?;
    runner.save()?;

    println!("Relocated {}", describe(&updated));
    Ok(())
}
