use super::*;

fn clock(total: f64) -> AnimationClock {
    AnimationClock::new(Fps::new(60, 1).unwrap(), total).unwrap()
}

#[test]
fn rejects_empty_or_invalid_duration() {
    let fps = Fps::new(60, 1).unwrap();
    assert!(AnimationClock::new(fps, 0.0).is_err());
    assert!(AnimationClock::new(fps, -3.0).is_err());
    assert!(AnimationClock::new(fps, f64::NAN).is_err());
    assert!(AnimationClock::new(fps, f64::INFINITY).is_err());
}

#[test]
fn total_frames_covers_duration() {
    assert_eq!(clock(22.0).total_frames(), 1320);
    assert_eq!(clock(15.0).total_frames(), 900);
    assert_eq!(clock(22.0).frame_range().len_frames(), 1320);
}

#[test]
fn progress_is_clamped() {
    let c = clock(10.0);
    assert_eq!(c.elapsed_secs(FrameIndex(30)), 0.5);
    assert_eq!(c.progress(FrameIndex(0)), 0.0);
    assert_eq!(c.progress(FrameIndex(300)), 0.5);
    assert_eq!(c.progress(FrameIndex(600)), 1.0);
    assert_eq!(c.progress(FrameIndex(10_000)), 1.0);
    assert_eq!(c.progress_at_secs(-4.0), 0.0);
    assert_eq!(c.progress_at_secs(f64::NAN), 0.0);
}
