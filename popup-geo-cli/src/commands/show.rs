//! `popup-geo show`: print one entity.

use clap::Args;
use popup_geo::entity::{EntityId, EntityKind};

use super::common::{describe, print_json, KindArg};
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(value_enum)]
    pub kind: KindArg,

    pub id: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn run(runner: &CliRunner, args: ShowArgs) -> Result<(), CliError> {
    let id = EntityId::new(args.id);
    let entity = runner
        .call("show", runner.index().get(EntityKind::from(args.kind), &id))
        .await?;

    if args.json {
        return print_json(&entity);
    }

    println!("{}", describe(&entity));
    println!("  updated {}", entity.updated_at().to_rfc3339());
    if let Some(vendor) = entity.as_vendor() {
        for product in &vendor.products {
            println!("  - {}", product);
        }
    }
    Ok(())
}
