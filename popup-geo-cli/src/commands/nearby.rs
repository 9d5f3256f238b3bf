//! `popup-geo nearby`: entities within a radius of a point.

use clap::Args;
use popup_geo::coord::Coordinates;
use popup_geo::entity::EntityKind;
use tracing::info;

use super::common::{describe, describe_ranked, print_json, KindArg};
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Args)]
pub struct NearbyArgs {
    /// Entity kind to search
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Search origin as lon,lat
    #[arg(long, allow_hyphen_values = true)]
    pub at: Coordinates,

    /// Radius in kilometers (default: query.default_radius_km)
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<f64>,

    /// Sort by distance, nearest first (default: query.nearest_first)
    #[arg(long)]
    pub nearest_first: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn run(runner: &CliRunner, args: NearbyArgs) -> Result<(), CliError> {
    let query = &runner.config().query;
    let radius = args.radius.unwrap_or(query.default_radius_km);
    let nearest_first = args.nearest_first || query.nearest_first;
    let kind = EntityKind::from(args.kind);
    let index = runner.index();

    if nearest_first {
        let ranked = runner
            .call("nearby", index.find_nearby_ranked(kind, args.at, radius))
            .await?;
        info!(kind = %kind, radius_km = radius, hits = ranked.len(), "Nearby (ranked)");

        if args.json {
            return print_json(&ranked);
        }
        if ranked.is_empty() {
            println!("No {}s within {} km of {}", kind, radius, args.at);
        }
        for hit in &ranked {
            println!("{}", describe_ranked(hit));
        }
    } else {
        let hits = runner
            .call("nearby", index.find_nearby(kind, args.at, radius))
            .await?;
        info!(kind = %kind, radius_km = radius, hits = hits.len(), "Nearby");

        if args.json {
            return print_json(&hits);
        }
        if hits.is_empty() {
            println!("No {}s within {} km of {}", kind, radius, args.at);
        }
        for hit in &hits {
            println!("{}", describe(hit));
        }
    }

    Ok(())
}
