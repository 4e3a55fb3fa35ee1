use super::*;

#[test]
fn haversine_zero_for_same_point() {
    assert_eq!(haversine_km(51.5214, -0.1448, 51.5214, -0.1448), 0.0);
}

#[test]
fn haversine_london_to_shenzhen() {
    let london = Location::new("London", 51.5214, -0.1448);
    let shenzhen = Location::new("Shenzhen", 22.6815, 113.839);
    let d = distance_km(&london, &shenzhen);
    // Roughly 9,500 km great-circle.
    assert!(d > 9_300.0 && d < 9_700.0, "{d}");
    assert!((d - distance_km(&shenzhen, &london)).abs() < 1e-9);
}

#[test]
fn haversine_quarter_meridian() {
    let d = haversine_km(0.0, 0.0, 90.0, 0.0);
    assert!((d - EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn ecef_axes() {
    let p = to_ecef(&GeoSample {
        lon: 0.0,
        lat: 0.0,
        alt: 0.0,
    });
    assert!((p.x - 6_378_137.0).abs() < 1e-6);
    assert!(p.y.abs() < 1e-6 && p.z.abs() < 1e-6);

    let pole = to_ecef(&GeoSample {
        lon: 0.0,
        lat: 90.0,
        alt: 1000.0,
    });
    assert!(pole.z > 6_356_000.0);
    assert!(pole.x.abs() < 1e-6);
}
