use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{JourneyError, JourneyResult};

/// Maps frame indices to elapsed seconds and global completion.
///
/// Nothing is stored besides the rate and the total length; every query recomputes from the
/// frame number, so seeking backwards is as cheap and exact as stepping forwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    fps: Fps,
    total_secs: f64,
}

impl AnimationClock {
    /// Create a clock for an animation lasting `total_secs` seconds.
    pub fn new(fps: Fps, total_secs: f64) -> JourneyResult<Self> {
        if !total_secs.is_finite() || total_secs <= 0.0 {
            return Err(JourneyError::validation(format!(
                "total duration must be a positive number of seconds, got {total_secs}"
            )));
        }
        Ok(Self { fps, total_secs })
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Total animation length in seconds.
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    /// Number of frames the render loop visits: `ceil(total * fps)`.
    pub fn total_frames(&self) -> u64 {
        self.fps.secs_to_frames_ceil(self.total_secs)
    }

    /// The frames of the whole animation.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange::from_start(self.total_frames())
    }

    /// Elapsed seconds at `frame` (`frame / fps`).
    pub fn elapsed_secs(&self, frame: FrameIndex) -> f64 {
        self.fps.frames_to_secs(frame.0)
    }

    /// Global progress at `frame`, clamped to `[0, 1]`.
    pub fn progress(&self, frame: FrameIndex) -> f64 {
        self.progress_at_secs(self.elapsed_secs(frame))
    }

    /// Global progress at an arbitrary time, clamped to `[0, 1]`; NaN maps to `0`.
    pub fn progress_at_secs(&self, secs: f64) -> f64 {
        let p = secs / self.total_secs;
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
