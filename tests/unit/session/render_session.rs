use super::*;
use crate::scene::catalog::{animation, default_animation};
use crate::session::sink::{InMemorySink, JsonLinesSink};

fn session(id: &str, arc_points: Option<u32>) -> RenderSession {
    let opts = RenderSessionOpts {
        sample: SampleOptions { arc_points },
    };
    RenderSession::new(&animation(id).unwrap(), opts).unwrap()
}

#[test]
fn render_range_streams_frames_in_order() {
    let sess = RenderSession::new(&default_animation(), RenderSessionOpts::default()).unwrap();
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(100), FrameIndex(160)).unwrap();
    let stats = sess.render_range(range, &mut sink).unwrap();

    assert_eq!(stats.frames_total, 60);
    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!(cfg.animation, "01-london-to-shenzhen");
    assert_eq!(cfg.total_frames, 1320);

    let frames: Vec<u64> = sink.frames().iter().map(|s| s.frame.0).collect();
    assert_eq!(frames, (100..160).collect::<Vec<_>>());
    let peak = sink
        .frames()
        .iter()
        .map(|s| s.pose.altitude)
        .fold(0.0, f64::max);
    assert_eq!(stats.peak_altitude, peak);
}

#[test]
fn full_flight_passes_through_clouds() {
    let sess = RenderSession::new(&default_animation(), RenderSessionOpts::default()).unwrap();
    let mut sink = InMemorySink::new();
    let stats = sess
        .render_range(sess.scene().frame_range(), &mut sink)
        .unwrap();
    assert_eq!(stats.frames_total, 1320);
    assert!(stats.cloudy_frames > 0);
    assert!(stats.peak_altitude <= 12_000_000.0 * 1.01);
}

#[test]
fn rejects_bad_ranges() {
    let sess = session("02-globe-flight-lines", None);
    let mut sink = InMemorySink::new();
    let empty = FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap();
    assert!(sess.render_range(empty, &mut sink).is_err());
    let past = FrameRange::new(FrameIndex(0), FrameIndex(901)).unwrap();
    assert!(sess.render_range(past, &mut sink).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn render_frame_bounds() {
    let sess = session("02-globe-flight-lines", Some(20));
    assert_eq!(sess.total_frames(), 900);
    let state = sess.render_frame(FrameIndex(899)).unwrap();
    assert_eq!(state.lines[0].progress, 1.0);
    assert_eq!(state.lines[0].points.len(), 21);
    assert!(matches!(
        sess.render_frame(FrameIndex(900)),
        Err(JourneyError::Validation(_))
    ));
}

#[test]
fn json_lines_sink_writes_one_object_per_frame() {
    let sess = session("02-globe-flight-lines", None);
    let mut sink = JsonLinesSink::new(Vec::new());
    let range = FrameRange::from_start(10);
    sess.render_range(range, &mut sink).unwrap();
    assert_eq!(sink.written(), 10);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    let last: FrameState = serde_json::from_str(lines[9]).unwrap();
    assert_eq!(last.frame, FrameIndex(9));
    assert_eq!(last, sess.render_frame(FrameIndex(9)).unwrap());
}
