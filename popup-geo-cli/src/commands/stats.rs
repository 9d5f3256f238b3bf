//! `popup-geo stats`: entity counts.

use clap::Args;

use super::common::print_json;
use crate::error::CliError;
use crate::runner::CliRunner;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print JSON ({"totalProducts": .., "totalVendors": ..})
    #[arg(long)]
    pub json: bool,
}

pub async fn run(runner: &CliRunner, args: StatsArgs) -> Result<(), CliError> {
    let stats = runner.call("stats", runner.index().stats()).await?;

    if args.json {
        return print_json(&stats);
    }

    println!("Products: {}", stats.total_products);
    println!("Vendors:  {}", stats.total_vendors);
    Ok(())
}
