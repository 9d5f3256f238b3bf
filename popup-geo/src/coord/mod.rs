//! Coordinate module
//!
//! Geographic points in GeoJSON order (longitude, latitude) and great-circle
//! distance on a spherical earth.
//!
//! # Accuracy
//!
//! [`distance_km`] uses the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Against the WGS-84 ellipsoid the error stays within
//! roughly 0.5%, which is the known accuracy bound of this module.

mod types;

pub use types::{Coordinates, CoordError, EARTH_RADIUS_KM, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Meters per kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Great-circle distance between two points in kilometers.
///
/// Inputs are not checked: out-of-range or NaN coordinates produce
/// meaningless output rather than an error.
///
/// # Example
///
/// ```
/// use popup_geo::coord::{distance_km, Coordinates};
///
/// let equator = Coordinates::new(0.0, 0.0);
/// let one_north = Coordinates::new(0.0, 1.0);
/// let d = distance_km(equator, one_north);
/// assert!((d - 111.19).abs() < 0.1);
/// ```
#[inline]
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat) * DEG_TO_RAD;
    let d_lon = (b.lon - a.lon) * DEG_TO_RAD;

    let h = (d_lat / 2.0).sin().powi(2)
        + (a.lat * DEG_TO_RAD).cos() * (b.lat * DEG_TO_RAD).cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal pairs just past 1.0 (NaN passes through)
    let h = if h > 1.0 { 1.0 } else { h };

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance between two points in meters.
#[inline]
pub fn distance_m(a: Coordinates, b: Coordinates) -> f64 {
    distance_km(a, b) * METERS_PER_KM
}

/// Convert a radius in kilometers to meters.
#[inline]
pub fn km_to_meters(km: f64) -> f64 {
    km * METERS_PER_KM
}

#[cfg(test)]
mod tests;
