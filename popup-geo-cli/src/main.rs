//! popup-geo CLI - Command-line interface
//!
//! Registers, relocates and searches pop-up vendors and their products
//! through the popup-geo location index.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::add::AddCommands;
use commands::config::ConfigCommands;
use commands::distance::DistanceArgs;
use commands::nearby::NearbyArgs;
use commands::relocate::RelocateArgs;
use commands::remove::RemoveArgs;
use commands::show::ShowArgs;
use commands::stats::StatsArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "popup-geo")]
#[command(version, about = "Location index for pop-up vendors and their products", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Inventory file to use instead of store.data_file
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a product or vendor
    #[command(subcommand)]
    Add(AddCommands),

    /// Move an entity to a new location
    Relocate(RelocateArgs),

    /// Find entities within a radius
    Nearby(NearbyArgs),

    /// Show one entity
    Show(ShowArgs),

    /// Remove an entity (vendors take their products with them)
    Remove(RemoveArgs),

    /// Show entity counts
    Stats(StatsArgs),

    /// Great-circle distance between two points
    Distance(DistanceArgs),

    /// View or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Add(_) => "add",
            Commands::Relocate(_) => "relocate",
            Commands::Nearby(_) => "nearby",
            Commands::Show(_) => "show",
            Commands::Remove(_) => "remove",
            Commands::Stats(_) => "stats",
            Commands::Distance(_) => "distance",
            Commands::Config(_) => "config",
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Commands that never touch the inventory skip logging and store setup.
    let command = match cli.command {
        Commands::Distance(args) => return commands::distance::run(args),
        Commands::Config(command) => return commands::config::run(command),
        other => other,
    };

    let runner = CliRunner::with_options(cli.debug, cli.data)?;
    runner.log_startup(command.name());

    match command {
        Commands::Add(command) => commands::add::run(&runner, command).await,
        Commands::Relocate(args) => commands::relocate::run(&runner, args).await,
        Commands::Nearby(args) => commands::nearby::run(&runner, args).await,
        Commands::Show(args) => commands::show::run(&runner, args).await,
        Commands::Remove(args) => commands::remove::run(&runner, args).await,
        Commands::Stats(args) => commands::stats::run(&runner, args).await,
        Commands::Distance(_) | Commands::Config(_) => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "popup-geo",
            "nearby",
            "vendors",
            "--at",
            "-73.99,40.73",
            "--radius",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Nearby(args) => {
                assert_eq!(args.at.lon, -73.99);
                assert_eq!(args.at.lat, 40.73);
                assert_eq!(args.radius, Some(2.0));
            }
            _ => panic!("expected nearby"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["popup-geo", "stats", "--debug", "--data", "/tmp/inv.json"])
            .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/inv.json")));
        assert_eq!(cli.command.name(), "stats");
    }

    #[test]
    fn test_add_product_parses() {
        let cli = Cli::try_parse_from([
            "popup-geo", "add", "product", "p-1", "--name", "Scarf", "--vendor", "v-1", "--at",
            "12.5,41.9", "--price", "15", "--quantity", "2",
        ])
        .unwrap();
        assert_eq!(cli.command.name(), "add");
    }

    #[test]
    fn test_bad_coordinates_rejected() {
        let result = Cli::try_parse_from(["popup-geo", "distance", "0,0", "200,0"]);
        assert!(result.is_err());
    }
}
