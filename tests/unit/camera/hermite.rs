use super::*;
use crate::camera::path::FlightSegment;

fn pose(lon: f64, lat: f64, alt: f64) -> CameraPose {
    CameraPose::top_down(lon, lat, alt)
}

fn five_leg_path() -> FlightPath {
    FlightPath::new(
        pose(-0.1448, 51.5214, 500.0),
        vec![
            FlightSegment::new("pullout", 4.0, pose(-0.1448, 51.5214, 2_000_000.0)),
            FlightSegment::new("cross", 6.0, pose(60.0, 40.0, 12_000_000.0)),
            FlightSegment::new("approach", 4.0, pose(104.1954, 35.8617, 6_000_000.0)),
            FlightSegment::new("descend", 4.0, pose(113.839, 22.6815, 300_000.0)),
            FlightSegment::new("dive", 4.0, pose(113.839, 22.6815, 500.0)),
        ],
    )
    .unwrap()
}

#[test]
fn ground_tangents_vanish_next_to_vertical_legs() {
    let h = HermiteLogAltitude::new(&five_leg_path());
    let t = h.tangents();
    assert_eq!(t.len(), 6);
    for i in [0, 1, 4, 5] {
        assert_eq!(t[i].lon, 0.0, "keyframe {i}");
        assert_eq!(t[i].lat, 0.0, "keyframe {i}");
    }
}

#[test]
fn interior_tangents_are_central_differences() {
    let h = HermiteLogAltitude::new(&five_leg_path());
    let t = h.tangents();
    // Keyframe 2 (t = 10 s) sits between keyframe 1 (4 s) and keyframe 3 (14 s).
    assert!((t[2].lon - (104.1954 - -0.1448) / 10.0).abs() < 1e-12);
    assert!((t[2].lat - (35.8617 - 51.5214) / 10.0).abs() < 1e-12);
    // Keyframe 3 (14 s) between keyframe 2 (10 s) and keyframe 4 (18 s).
    assert!((t[3].lon - (113.839 - 60.0) / 8.0).abs() < 1e-12);
    assert_eq!(t[3].heading, 0.0);
}

#[test]
fn altitude_blends_logarithmically() {
    let path = five_leg_path();
    let h = HermiteLogAltitude::new(&path);
    // Midpoint of the cross leg: 7 s of 22 s.
    let (idx, pose) = h.interpolate(&path, 7.0 / 22.0);
    assert_eq!(idx, 1);
    let geometric_mean = (2_000_000.0_f64 * 12_000_000.0).sqrt();
    assert!((pose.altitude - geometric_mean).abs() < 1e-3);
}

#[test]
fn vertical_leg_has_no_ground_drift() {
    let path = five_leg_path();
    let h = HermiteLogAltitude::new(&path);
    for i in 1..400 {
        let p = (4.0 * f64::from(i) / 400.0) / 22.0;
        let (idx, pose) = h.interpolate(&path, p);
        assert_eq!(idx, 0);
        assert_eq!(pose.longitude, -0.1448);
        assert_eq!(pose.latitude, 51.5214);
        assert!(pose.altitude > 500.0 && pose.altitude < 2_000_000.0);
    }
}

#[test]
fn degenerate_interior_leg_holds_the_keyframe() {
    let k = pose(10.0, 10.0, 5000.0);
    let path = FlightPath::new(
        pose(0.0, 0.0, 5000.0),
        vec![
            FlightSegment::new("a", 2.0, k),
            FlightSegment::new("hold", 2.0, k),
            FlightSegment::new("b", 2.0, pose(20.0, 0.0, 5000.0)),
        ],
    )
    .unwrap();
    let h = HermiteLogAltitude::new(&path);
    for i in 1..50 {
        let p = (2.0 + 2.0 * f64::from(i) / 50.0) / 6.0;
        let (idx, pose) = h.interpolate(&path, p);
        assert_eq!(idx, 1);
        assert!(pose.is_finite());
        assert_eq!(pose.longitude, 10.0);
        assert_eq!(pose.latitude, 10.0);
        assert_eq!(pose.altitude, 5000.0);
    }
}
