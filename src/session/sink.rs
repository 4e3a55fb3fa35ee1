use std::io::Write;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{JourneyError, JourneyResult};
use crate::scene::FrameState;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Id of the animation being rendered.
    pub animation: String,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Frames in the whole animation (not just the rendered range).
    pub total_frames: u64,
}

/// Sink contract for consuming frame states in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested render range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> JourneyResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameState) -> JourneyResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> JourneyResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameState>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[FrameState] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> JourneyResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &FrameState) -> JourneyResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> JourneyResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes one JSON object per frame, newline separated.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    written: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Frames written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> JourneyResult<()> {
        tracing::debug!(animation = %cfg.animation, total_frames = cfg.total_frames, "json lines sink begin");
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameState) -> JourneyResult<()> {
        serde_json::to_writer(&mut self.out, frame).map_err(|e| {
            if e.is_io() {
                io_error(e.into(), format!("write frame {}", idx.0))
            } else {
                JourneyError::serde(format!("serialize frame {}: {e}", idx.0))
            }
        })?;
        self.out
            .write_all(b"\n")
            .map_err(|e| io_error(e, format!("write frame {}", idx.0)))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> JourneyResult<()> {
        self.out
            .flush()
            .map_err(|e| io_error(e, "flush frame states"))
    }
}

fn io_error(e: std::io::Error, context: impl Into<String>) -> JourneyError {
    JourneyError::Other(anyhow::Error::new(e).context(context.into()))
}

#[cfg(test)]
#[path = "../../tests/unit/session/sink.rs"]
mod tests;
