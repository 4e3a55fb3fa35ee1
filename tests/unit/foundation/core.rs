use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_frame_time_conversions() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.frames_to_secs(60), 1.0);
    assert_eq!(fps.secs_to_frames_ceil(22.0), 1320);
    assert_eq!(fps.secs_to_frames_ceil(0.5), 30);
    assert_eq!(fps.secs_to_frames_ceil(0.51), 31);
    assert_eq!(fps.secs_to_frames_ceil(-1.0), 0);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 1e-2);
}

#[test]
fn fps_deserializes_from_integer_or_ratio() {
    let whole: Fps = serde_json::from_str("60").unwrap();
    assert_eq!(whole, Fps::new(60, 1).unwrap());

    let ratio: Fps = serde_json::from_str(r#"{"num":30000,"den":1001}"#).unwrap();
    assert_eq!(ratio, Fps::new(30000, 1001).unwrap());

    assert!(serde_json::from_str::<Fps>("0").is_err());
    assert_eq!(serde_json::to_string(&whole).unwrap(), "60");
}

#[test]
fn frame_range_clamps_and_iterates() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.clamp(FrameIndex(99)), FrameIndex(4));
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(2));
    assert_eq!(r.iter().count(), 3);
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn camera_pose_json_uses_short_field_names() {
    let pose = CameraPose::top_down(-0.1448, 51.5214, 500.0);
    let json = serde_json::to_value(pose).unwrap();
    assert_eq!(json["lon"], -0.1448);
    assert_eq!(json["alt"], 500.0);
    assert_eq!(json["pitch"], -90.0);

    let long: CameraPose = serde_json::from_str(
        r#"{"longitude":1.0,"latitude":2.0,"altitude":3.0,"heading":0.0,"pitch":-45.0}"#,
    )
    .unwrap();
    assert_eq!(long.altitude, 3.0);
}

#[test]
fn location_optional_name_zh() {
    let loc: Location = serde_json::from_str(r#"{"lat":1.0,"lon":2.0,"name":"X"}"#).unwrap();
    assert_eq!(loc.name_zh, None);
    let loc = loc.with_name_zh("Y");
    assert_eq!(loc.name_zh.as_deref(), Some("Y"));
}
