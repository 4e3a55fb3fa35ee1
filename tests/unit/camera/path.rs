use super::*;

fn pose(lon: f64, lat: f64, alt: f64) -> CameraPose {
    CameraPose::top_down(lon, lat, alt)
}

fn sample_path() -> FlightPath {
    FlightPath::new(
        pose(0.0, 0.0, 500.0),
        vec![
            FlightSegment::new("up", 4.0, pose(0.0, 0.0, 2_000_000.0)),
            FlightSegment::new("across", 6.0, pose(60.0, 40.0, 12_000_000.0)),
            FlightSegment::new("down", 10.0, pose(60.0, 40.0, 500.0)),
        ],
    )
    .unwrap()
}

#[test]
fn flattens_keyframes_and_times() {
    let path = sample_path();
    assert_eq!(path.keyframes().len(), 4);
    assert_eq!(path.keyframe_times(), &[0.0, 4.0, 10.0, 20.0]);
    assert_eq!(path.cumulative_fractions(), &[0.0, 0.2, 0.5, 1.0]);
    assert_eq!(path.total_secs(), 20.0);
    assert_eq!(path.segment_count(), 3);
    assert_eq!(path.start().altitude, 500.0);
    assert_eq!(path.end().altitude, 500.0);
    assert_eq!(path.segment_name(1), "across");
    assert_eq!(path.segment_name(3), "end");
}

#[test]
fn rejects_malformed_paths() {
    let start = pose(0.0, 0.0, 500.0);
    assert!(FlightPath::new(start, vec![]).is_err());
    assert!(FlightPath::new(start, vec![FlightSegment::new("z", 0.0, start)]).is_err());
    assert!(FlightPath::new(start, vec![FlightSegment::new("n", -1.0, start)]).is_err());
    assert!(FlightPath::new(start, vec![FlightSegment::new("i", f64::NAN, start)]).is_err());
    assert!(
        FlightPath::new(
            start,
            vec![FlightSegment::new("p", 1.0, pose(f64::INFINITY, 0.0, 1.0))]
        )
        .is_err()
    );
    assert!(FlightPath::new(pose(f64::NAN, 0.0, 1.0), vec![FlightSegment::new("s", 1.0, start)]).is_err());
}

#[test]
fn classifies_vertical_segments() {
    let path = sample_path();
    assert!(path.is_vertical(0));
    assert!(!path.is_vertical(1));
    assert!(path.is_vertical(2));
    assert!(!path.is_vertical(3));
}

#[test]
fn locate_prefers_earlier_segment_on_boundaries() {
    let path = sample_path();
    assert_eq!(path.locate_time(0.0), (0, 0.0));
    assert_eq!(path.locate_time(2.0), (0, 0.5));
    assert_eq!(path.locate_time(4.0), (0, 1.0));
    assert_eq!(path.locate_time(7.0), (1, 0.5));
    assert_eq!(path.locate_time(20.0), (2, 1.0));
    assert_eq!(path.locate_time(25.0), (2, 1.0));
    assert_eq!(path.locate_fraction(0.75), (2, 0.5));
    let (idx, local) = path.locate_fraction(0.35);
    assert_eq!(idx, 1);
    assert!((local - 0.5).abs() < 1e-12);
}
