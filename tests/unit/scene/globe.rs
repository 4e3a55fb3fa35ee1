use super::*;

fn line() -> LineSegment {
    LineSegment {
        from: Location::new("Shenzhen", 22.6815, 113.839),
        to: Location::new("London", 51.5214, -0.1448),
        duration: 8.0,
        color: "#fbbf24".to_owned(),
        arc_height: 1.2,
        delay: 2.0,
    }
}

fn camera(follow_line: bool) -> GlobeCameraConfig {
    GlobeCameraConfig {
        lon: 50.0,
        lat: 30.0,
        alt: 20_000_000.0,
        rotation_speed: 2.0,
        follow_line,
        follow_alt: None,
        follow_pitch: None,
    }
}

fn scene(follow_line: bool) -> GlobeLineScene {
    GlobeLineScene::new(
        Fps::new(60, 1).unwrap(),
        camera(follow_line),
        15.0,
        vec![line()],
        vec![],
    )
    .unwrap()
}

#[test]
fn rotation_mode_spins_longitude() {
    let s = scene(false);
    assert_eq!(s.start_pose(), CameraPose::top_down(50.0, 30.0, 20_000_000.0));
    let p = s.pose_at_frame(FrameIndex(300));
    assert_eq!(p.longitude, 60.0);
    assert_eq!(p.latitude, 30.0);
    assert_eq!(p.pitch, -90.0);
}

#[test]
fn follow_mode_tracks_first_line() {
    let s = scene(true);
    let start = s.start_pose();
    assert_eq!(start.longitude, 113.839);
    assert_eq!(start.latitude, 22.6815);
    assert_eq!(start.altitude, DEFAULT_FOLLOW_ALT);
    assert_eq!(start.pitch, DEFAULT_FOLLOW_PITCH);

    // Still waiting for the delay.
    assert_eq!(s.pose_at_secs(1.0), start);

    let mid = s.pose_at_secs(6.0);
    assert!((mid.longitude - (113.839 + -0.1448) / 2.0).abs() < 1e-9);

    let done = s.pose_at_secs(12.0);
    assert!((done.longitude - -0.1448).abs() < 1e-9);
    assert!((done.latitude - 51.5214).abs() < 1e-9);
}

#[test]
fn follow_overrides_apply() {
    let mut cam = camera(true);
    cam.follow_alt = Some(3_000_000.0);
    cam.follow_pitch = Some(-45.0);
    let s = GlobeLineScene::new(Fps::new(30, 1).unwrap(), cam, 15.0, vec![line()], vec![]).unwrap();
    let p = s.start_pose();
    assert_eq!(p.altitude, 3_000_000.0);
    assert_eq!(p.pitch, -45.0);
}

#[test]
fn follow_without_lines_rotates() {
    let s = GlobeLineScene::new(Fps::new(30, 1).unwrap(), camera(true), 15.0, vec![], vec![])
        .unwrap();
    assert_eq!(s.start_pose().pitch, -90.0);
}

#[test]
fn rejects_non_finite_camera() {
    let mut cam = camera(false);
    cam.alt = f64::NAN;
    assert!(GlobeLineScene::new(Fps::new(30, 1).unwrap(), cam, 15.0, vec![], vec![]).is_err());
}
