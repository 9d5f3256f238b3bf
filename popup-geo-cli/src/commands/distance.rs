//! `popup-geo distance`: great-circle distance between two points.

use clap::Args;
use popup_geo::coord::{distance_km, km_to_meters, Coordinates};

use crate::error::CliError;

#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// First point as lon,lat (e.g., -0.1278,51.5074)
    #[arg(allow_hyphen_values = true)]
    pub from: Coordinates,

    /// Second point as lon,lat
    #[arg(allow_hyphen_values = true)]
    pub to: Coordinates,

    /// Print meters instead of kilometers
    #[arg(long)]
    pub meters: bool,
}

/// Distance as printed by the command.
pub fn format_distance(args: &DistanceArgs) -> String {
    let km = distance_km(args.from, args.to);
    if args.meters {
        format!("{:.1} m", km_to_meters(km))
    } else {
        format!("{:.3} km", km)
    }
}

pub fn run(args: DistanceArgs) -> Result<(), CliError> {
    println!("{}", format_distance(&args));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_north() {
        let args = DistanceArgs {
            from: Coordinates::new(0.0, 0.0),
            to: Coordinates::new(0.0, 1.0),
            meters: false,
        };
        assert_eq!(format_distance(&args), "111.195 km");
    }

    #[test]
    fn test_meters() {
        let args = DistanceArgs {
            from: Coordinates::new(0.0, 0.0),
            to: Coordinates::new(0.0, 0.0),
            meters: true,
        };
        assert_eq!(format_distance(&args), "0.0 m");
    }
}
