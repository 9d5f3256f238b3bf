//! Coordinate type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Mean Earth radius used by the spherical model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point, longitude first as in GeoJSON.
///
/// Construction through [`Coordinates::new`] is unchecked so that pure
/// functions such as [`distance_km`](super::distance_km) can accept any
/// input. Use [`Coordinates::try_new`] or [`Coordinates::validate`] where
/// the range invariant matters.
///
/// Serializes as a GeoJSON point:
///
/// ```
/// use popup_geo::coord::Coordinates;
///
/// let point = Coordinates::new(-122.4194, 37.7749);
/// let json = serde_json::to_string(&point).unwrap();
/// assert_eq!(json, r#"{"type":"Point","coordinates":[-122.4194,37.7749]}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "GeoJsonPoint", try_from = "GeoJsonPoint")]
pub struct Coordinates {
    /// Longitude in decimal degrees (-180 to 180)
    pub lon: f64,
    /// Latitude in decimal degrees (-90 to 90)
    pub lat: f64,
}

impl Coordinates {
    /// Create a coordinate pair without range checks.
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Create a coordinate pair, rejecting values outside the valid range.
    pub fn try_new(lon: f64, lat: f64) -> Result<Self, CoordError> {
        let coordinates = Self::new(lon, lat);
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Check the longitude/latitude range invariant.
    ///
    /// NaN fails both range checks.
    pub fn validate(&self) -> Result<(), CoordError> {
        if !(MIN_LON..=MAX_LON).contains(&self.lon) {
            return Err(CoordError::InvalidLongitude(self.lon));
        }
        if !(MIN_LAT..=MAX_LAT).contains(&self.lat) {
            return Err(CoordError::InvalidLatitude(self.lat));
        }
        Ok(())
    }

    /// Returns `true` if both components are within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The pair as a GeoJSON-ordered array `[lon, lat]`.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl fmt::Display for Coordinates {
    /// Formats as `lon,lat`, the same form accepted by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

impl FromStr for Coordinates {
    type Err = CoordError;

    /// Parses `lon,lat` and validates the range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lon, lat) = s
            .split_once(',')
            .ok_or_else(|| CoordError::Malformed(s.to_string()))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| CoordError::Malformed(s.to_string()))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| CoordError::Malformed(s.to_string()))?;
        Self::try_new(lon, lat)
    }
}

/// Wire form of [`Coordinates`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: GeoJsonType,
    coordinates: [f64; 2],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum GeoJsonType {
    Point,
}

impl From<Coordinates> for GeoJsonPoint {
    fn from(value: Coordinates) -> Self {
        Self {
            kind: GeoJsonType::Point,
            coordinates: value.to_array(),
        }
    }
}

impl TryFrom<GeoJsonPoint> for Coordinates {
    type Error = CoordError;

    fn try_from(value: GeoJsonPoint) -> Result<Self, Self::Error> {
        let [lon, lat] = value.coordinates;
        Self::try_new(lon, lat)
    }
}

/// Errors raised when a coordinate pair is out of range or unparseable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Longitude is outside -180.0 to 180.0
    #[error("Invalid longitude: {0} (must be between {} and {})", MIN_LON, MAX_LON)]
    InvalidLongitude(f64),
    /// Latitude is outside -90.0 to 90.0
    #[error("Invalid latitude: {0} (must be between {} and {})", MIN_LAT, MAX_LAT)]
    InvalidLatitude(f64),
    /// Text could not be read as `lon,lat`
    #[error("Malformed coordinates: '{0}' (expected 'lon,lat')")]
    Malformed(String),
}
