use super::*;
use crate::foundation::core::{CameraPose, FrameIndex};

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("disk full"))
    }
}

fn state() -> FrameState {
    FrameState {
        frame: FrameIndex(0),
        elapsed_secs: 0.0,
        progress: 0.0,
        percent: 0.0,
        pose: CameraPose::top_down(0.0, 0.0, 1000.0),
        segment: "takeoff".to_owned(),
        cloud_opacity: 0.0,
        lines: Vec::new(),
        trail: None,
    }
}

fn is_io(err: &JourneyError) -> bool {
    match err {
        JourneyError::Other(inner) => inner.downcast_ref::<std::io::Error>().is_some(),
        _ => false,
    }
}

#[test]
fn write_failures_surface_as_io_errors() {
    let mut sink = JsonLinesSink::new(FailingWriter);
    let err = sink.push_frame(FrameIndex(0), &state()).unwrap_err();
    assert!(is_io(&err), "{err:?}");
    assert!(err.to_string().contains("write frame 0"));
    assert_eq!(sink.written(), 0);
}

#[test]
fn flush_failures_surface_as_io_errors() {
    let mut sink = JsonLinesSink::new(FailingWriter);
    let err = sink.end().unwrap_err();
    assert!(is_io(&err), "{err:?}");
    assert!(err.to_string().contains("flush frame states"));
}

#[test]
fn in_memory_sink_resets_on_begin() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        animation: "a".to_owned(),
        fps: Fps { num: 30, den: 1 },
        total_frames: 3,
    };
    sink.begin(cfg.clone()).unwrap();
    sink.push_frame(FrameIndex(0), &state()).unwrap();
    sink.end().unwrap();
    assert!(sink.is_ended());

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_ended());
}
