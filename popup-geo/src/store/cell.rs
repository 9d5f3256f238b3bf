//! 1°×1° geographic cells used to bucket stored points.
//!
//! A [`GeoCell`] is identified by the floor of latitude and longitude. A
//! [`CellCover`] is the set of cells overlapping the bounding box of a
//! spherical cap, so a radius query only has to look inside those cells
//! before applying the exact haversine test.

use std::f64::consts::PI;
use std::fmt;
use std::ops::RangeInclusive;

use crate::coord::{Coordinates, EARTH_RADIUS_KM};

/// Slack added to the cap's bounding box, in degrees.
const BOX_EPSILON_DEG: f64 = 1e-9;

/// A 1°×1° cell.
///
/// Longitude 180 shares a cell with -180 and latitude 90 folds into the
/// northernmost row, so every valid coordinate maps to one of 180×360 cells.
///
/// ```
/// use popup_geo::coord::Coordinates;
/// use popup_geo::store::GeoCell;
///
/// let cell = GeoCell::from_coordinates(Coordinates::new(7.23, 43.67));
/// assert_eq!(format!("{}", cell), "+43+007");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoCell {
    /// Floor of the latitude (south edge of the cell).
    pub lat: i32,
    /// Floor of the longitude (west edge of the cell).
    pub lon: i32,
}

impl GeoCell {
    /// Create a cell from integer coordinates, normalising out-of-band values.
    pub fn new(lat: i32, lon: i32) -> Self {
        Self {
            lat: lat.clamp(-90, 89),
            lon: normalize_lon(lon),
        }
    }

    /// The cell containing a point.
    pub fn from_coordinates(point: Coordinates) -> Self {
        Self::new(point.lat.floor() as i32, point.lon.floor() as i32)
    }
}

impl fmt::Display for GeoCell {
    /// Format as a signed cell name (e.g., `+43+006`, `-46+012`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+03}{:+04}", self.lat, self.lon)
    }
}

fn normalize_lon(lon: i32) -> i32 {
    (lon + 180).rem_euclid(360) - 180
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LonSpan {
    /// Every longitude cell
    Full,
    /// Unnormalised floor range; may cross the antimeridian
    Range(RangeInclusive<i32>),
}

/// Cells overlapping the bounding box of a spherical cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCover {
    lat: RangeInclusive<i32>,
    lon: LonSpan,
}

impl CellCover {
    /// Cover for every point within `radius_km` of `origin`.
    ///
    /// The latitude band is `radius / R` either side of the origin. The
    /// longitude half-width is `asin(sin(radius / R) / cos(lat))`; when the
    /// cap reaches a pole or that ratio is at least one, the whole band is
    /// covered.
    pub fn around(origin: Coordinates, radius_km: f64) -> Self {
        let angular = radius_km / EARTH_RADIUS_KM;
        if angular >= PI {
            return Self::everything();
        }

        let d_lat = angular.to_degrees() + BOX_EPSILON_DEG;
        let lat_min = origin.lat - d_lat;
        let lat_max = origin.lat + d_lat;

        let lat = (lat_min.max(-90.0).floor() as i32).clamp(-90, 89)
            ..=(lat_max.min(90.0).floor() as i32).clamp(-90, 89);

        if lat_min <= -90.0 || lat_max >= 90.0 {
            return Self {
                lat,
                lon: LonSpan::Full,
            };
        }

        let ratio = angular.sin() / origin.lat.to_radians().cos();
        if ratio >= 1.0 {
            return Self {
                lat,
                lon: LonSpan::Full,
            };
        }

        let d_lon = ratio.asin().to_degrees() + BOX_EPSILON_DEG;
        let start = (origin.lon - d_lon).floor() as i32;
        let end = (origin.lon + d_lon).floor() as i32;
        let lon = if end - start >= 359 {
            LonSpan::Full
        } else {
            LonSpan::Range(start..=end)
        };

        Self { lat, lon }
    }

    /// Cover of the whole globe.
    pub fn everything() -> Self {
        Self {
            lat: -90..=89,
            lon: LonSpan::Full,
        }
    }

    fn lon_len(&self) -> usize {
        match &self.lon {
            LonSpan::Full => 360,
            LonSpan::Range(r) => (r.end() - r.start() + 1) as usize,
        }
    }

    /// Number of cells in the cover.
    pub fn len(&self) -> usize {
        let lat_len = (self.lat.end() - self.lat.start() + 1).max(0) as usize;
        lat_len * self.lon_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the covered cells. Longitudes are normalised, so a cover
    /// crossing the antimeridian yields cells on both sides of it.
    pub fn iter(&self) -> impl Iterator<Item = GeoCell> + '_ {
        let lons: RangeInclusive<i32> = match &self.lon {
            LonSpan::Full => -180..=179,
            LonSpan::Range(r) => r.clone(),
        };
        self.lat
            .clone()
            .flat_map(move |lat| lons.clone().map(move |lon| GeoCell::new(lat, lon)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_coordinates_positive() {
        let cell = GeoCell::from_coordinates(Coordinates::new(7.23, 43.67));
        assert_eq!(cell, GeoCell::new(43, 7));
    }

    #[test]
    fn test_from_coordinates_negative() {
        let cell = GeoCell::from_coordinates(Coordinates::new(-118.4, -33.9));
        assert_eq!(cell.lat, -34);
        assert_eq!(cell.lon, -119);
    }

    #[test]
    fn test_antimeridian_shares_cell() {
        let east = GeoCell::from_coordinates(Coordinates::new(180.0, 10.5));
        let west = GeoCell::from_coordinates(Coordinates::new(-180.0, 10.5));
        assert_eq!(east, west);
        assert_eq!(east.lon, -180);
    }

    #[test]
    fn test_north_pole_folds_into_top_row() {
        let cell = GeoCell::from_coordinates(Coordinates::new(0.0, 90.0));
        assert_eq!(cell.lat, 89);
    }

    #[test]
    fn test_display() {
        assert_eq!(GeoCell::new(43, 6).to_string(), "+43+006");
        assert_eq!(GeoCell::new(-46, 12).to_string(), "-46+012");
        assert_eq!(GeoCell::new(33, -119).to_string(), "+33-119");
        assert_eq!(GeoCell::new(0, 0).to_string(), "+00+000");
    }

    #[test]
    fn test_zero_radius_covers_single_cell() {
        let origin = Coordinates::new(2.35, 48.85);
        let cover = CellCover::around(origin, 0.0);
        let cells: Vec<_> = cover.iter().collect();
        assert_eq!(cells, vec![GeoCell::new(48, 2)]);
        assert_eq!(cover.len(), 1);
    }

    #[test]
    fn test_small_radius_spans_neighbours() {
        // 20 km from a point 0.05° from the cell corner reaches all four cells
        let origin = Coordinates::new(10.05, 45.05);
        let cells: HashSet<_> = CellCover::around(origin, 20.0).iter().collect();
        assert!(cells.contains(&GeoCell::new(45, 10)));
        assert!(cells.contains(&GeoCell::new(44, 9)));
        assert!(cells.contains(&GeoCell::new(44, 10)));
        assert!(cells.contains(&GeoCell::new(45, 9)));
    }

    #[test]
    fn test_antimeridian_wraps() {
        let origin = Coordinates::new(179.95, 0.0);
        let cells: HashSet<_> = CellCover::around(origin, 30.0).iter().collect();
        assert!(cells.contains(&GeoCell::new(0, 179)));
        assert!(cells.contains(&GeoCell::new(0, -180)));
    }

    #[test]
    fn test_polar_cap_covers_full_band() {
        let origin = Coordinates::new(0.0, 89.9);
        let cover = CellCover::around(origin, 50.0);
        let cells: HashSet<_> = cover.iter().collect();
        assert!(cells.contains(&GeoCell::new(89, 179)));
        assert!(cells.contains(&GeoCell::new(89, -180)));
        assert_eq!(cover.len() % 360, 0);
    }

    #[test]
    fn test_huge_radius_covers_globe() {
        let cover = CellCover::around(Coordinates::new(0.0, 0.0), 25_000.0);
        assert_eq!(cover, CellCover::everything());
        assert_eq!(cover.len(), 180 * 360);
    }

    #[test]
    fn test_len_matches_iter() {
        let cover = CellCover::around(Coordinates::new(-73.98, 40.75), 300.0);
        assert_eq!(cover.len(), cover.iter().count());
        assert!(!cover.is_empty());
    }
}
