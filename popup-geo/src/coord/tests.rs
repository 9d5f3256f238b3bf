//! Tests for coordinates and distance

use super::*;
use proptest::prelude::*;

#[test]
fn test_one_degree_latitude_at_equator() {
    // 1° of latitude at the equator is 2πR/360 ≈ 111.19 km
    let d = distance_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
    let expected = 111.19;
    assert!(
        (d - expected).abs() / expected < 0.005,
        "expected ~{} km, got {}",
        expected,
        d
    );
}

#[test]
fn test_same_point_is_zero() {
    let paris = Coordinates::new(2.3522, 48.8566);
    assert_eq!(distance_km(paris, paris), 0.0);
}

#[test]
fn test_paris_to_london() {
    // Reference great-circle distance on the 6371 km sphere: ~343.5 km
    let paris = Coordinates::new(2.3522, 48.8566);
    let london = Coordinates::new(-0.1278, 51.5074);
    let d = distance_km(paris, london);
    assert!((d - 343.5).abs() < 1.0, "got {}", d);
}

#[test]
fn test_antipodes_half_circumference() {
    let a = Coordinates::new(0.0, 0.0);
    let b = Coordinates::new(180.0, 0.0);
    let half = std::f64::consts::PI * EARTH_RADIUS_KM;
    assert!((distance_km(a, b) - half).abs() < 1e-6);
}

#[test]
fn test_across_antimeridian_is_short() {
    let west = Coordinates::new(179.9, 0.0);
    let east = Coordinates::new(-179.9, 0.0);
    let d = distance_km(west, east);
    assert!(d < 23.0, "crossing the antimeridian should be ~22 km, got {}", d);
}

#[test]
fn test_nan_in_nan_out() {
    let d = distance_km(Coordinates::new(f64::NAN, 0.0), Coordinates::new(0.0, 0.0));
    assert!(d.is_nan());
}

#[test]
fn test_distance_m_and_km_to_meters() {
    let a = Coordinates::new(0.0, 0.0);
    let b = Coordinates::new(0.0, 1.0);
    assert!((distance_m(a, b) - distance_km(a, b) * 1000.0).abs() < 1e-9);
    assert_eq!(km_to_meters(2.5), 2500.0);
    assert_eq!(km_to_meters(0.0), 0.0);
}

#[test]
fn test_validate_accepts_bounds() {
    assert!(Coordinates::new(-180.0, -90.0).is_valid());
    assert!(Coordinates::new(180.0, 90.0).is_valid());
    assert!(Coordinates::new(0.0, 0.0).is_valid());
}

#[test]
fn test_validate_rejects_latitude_95() {
    let result = Coordinates::try_new(10.0, 95.0);
    assert_eq!(result, Err(CoordError::InvalidLatitude(95.0)));
}

#[test]
fn test_validate_rejects_longitude() {
    let result = Coordinates::try_new(-180.5, 0.0);
    assert_eq!(result, Err(CoordError::InvalidLongitude(-180.5)));
}

#[test]
fn test_validate_rejects_nan() {
    assert!(matches!(
        Coordinates::new(f64::NAN, 0.0).validate(),
        Err(CoordError::InvalidLongitude(_))
    ));
    assert!(matches!(
        Coordinates::new(0.0, f64::NAN).validate(),
        Err(CoordError::InvalidLatitude(_))
    ));
}

#[test]
fn test_parse_lon_lat() {
    let c: Coordinates = "-73.9857, 40.7484".parse().unwrap();
    assert_eq!(c, Coordinates::new(-73.9857, 40.7484));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(matches!(
        "north".parse::<Coordinates>(),
        Err(CoordError::Malformed(_))
    ));
    assert!(matches!(
        "1.0,abc".parse::<Coordinates>(),
        Err(CoordError::Malformed(_))
    ));
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!(
        "0,95".parse::<Coordinates>(),
        Err(CoordError::InvalidLatitude(95.0))
    );
}

#[test]
fn test_display_matches_parse_format() {
    let c = Coordinates::new(12.5, -3.25);
    assert_eq!(c.to_string(), "12.5,-3.25");
    assert_eq!(c.to_string().parse::<Coordinates>().unwrap(), c);
}

#[test]
fn test_geojson_deserialize() {
    let json = r#"{"type":"Point","coordinates":[151.2093,-33.8688]}"#;
    let c: Coordinates = serde_json::from_str(json).unwrap();
    assert_eq!(c, Coordinates::new(151.2093, -33.8688));
}

#[test]
fn test_geojson_deserialize_rejects_out_of_range() {
    let json = r#"{"type":"Point","coordinates":[0.0,95.0]}"#;
    let result: Result<Coordinates, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_geojson_deserialize_rejects_other_geometry() {
    let json = r#"{"type":"LineString","coordinates":[0.0,0.0]}"#;
    let result: Result<Coordinates, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_error_messages() {
    let msg = CoordError::InvalidLatitude(95.0).to_string();
    assert!(msg.contains("95"));
    assert!(msg.contains("-90"));
}

fn valid_coordinates() -> impl Strategy<Value = Coordinates> {
    (-180.0f64..=180.0f64, -90.0f64..=90.0f64).prop_map(|(lon, lat)| Coordinates::new(lon, lat))
}

proptest! {
    /// Property: distance from a point to itself is zero.
    #[test]
    fn prop_distance_identity(a in valid_coordinates()) {
        prop_assert_eq!(distance_km(a, a), 0.0);
    }

    /// Property: distance is symmetric.
    #[test]
    fn prop_distance_symmetric(a in valid_coordinates(), b in valid_coordinates()) {
        let ab = distance_km(a, b);
        let ba = distance_km(b, a);
        prop_assert!((ab - ba).abs() < 1e-9, "ab={} ba={}", ab, ba);
    }

    /// Property: distance never exceeds half the circumference.
    #[test]
    fn prop_distance_bounded(a in valid_coordinates(), b in valid_coordinates()) {
        let d = distance_km(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }

    /// Property: every in-range pair passes validation.
    #[test]
    fn prop_valid_pairs_pass_validation(a in valid_coordinates()) {
        prop_assert!(a.validate().is_ok());
    }
}
