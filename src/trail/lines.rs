use crate::animation::clock::AnimationClock;
use crate::foundation::core::{Fps, FrameIndex, Location};
use crate::foundation::error::{JourneyError, JourneyResult};
use crate::geo::arc::{ArcPoints, generate_arc_points};

/// An animated flight line drawn from `from` to `to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    /// Origin of the line.
    pub from: Location,
    /// Destination of the line.
    pub to: Location,
    /// Seconds taken to draw the full line.
    pub duration: f64,
    /// CSS color, passed through to the renderer untouched.
    pub color: String,
    /// Arc height multiplier (1.0 = default bulge).
    #[serde(rename = "arcHeight", alias = "arc_height", default = "default_arc_height")]
    pub arc_height: f64,
    /// Seconds to wait before drawing starts.
    #[serde(default)]
    pub delay: f64,
}

fn default_arc_height() -> f64 {
    1.0
}

impl LineSegment {
    /// Draw progress at `elapsed` seconds, or `None` before the line's delay has passed.
    ///
    /// Progress is linear in time so the draw rate reads as constant whatever the camera does.
    pub fn progress_at(&self, elapsed: f64) -> Option<f64> {
        if elapsed.is_nan() || elapsed < self.delay {
            return None;
        }
        if self.duration <= 0.0 {
            return Some(1.0);
        }
        Some(((elapsed - self.delay) / self.duration).clamp(0.0, 1.0))
    }

    /// Seconds at which the line is fully drawn.
    pub fn end_secs(&self) -> f64 {
        self.delay + self.duration
    }

    fn validate(&self, idx: usize) -> JourneyResult<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(JourneyError::validation(format!(
                "line {idx} duration must be > 0, got {}",
                self.duration
            )));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(JourneyError::validation(format!(
                "line {idx} delay must be >= 0, got {}",
                self.delay
            )));
        }
        if !self.arc_height.is_finite() || self.arc_height < 0.0 {
            return Err(JourneyError::validation(format!(
                "line {idx} arc height must be >= 0, got {}",
                self.arc_height
            )));
        }
        let coords = [
            self.from.latitude,
            self.from.longitude,
            self.to.latitude,
            self.to.longitude,
        ];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(JourneyError::validation(format!(
                "line {idx} endpoints must be finite"
            )));
        }
        Ok(())
    }
}

/// Draw state of one line at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineState<'a> {
    /// Origin of the line.
    pub from: &'a Location,
    /// Destination of the line.
    pub to: &'a Location,
    /// Draw progress in `[0, 1]`; `0` while waiting for the delay.
    pub progress: f64,
    /// `false` until the line's delay has elapsed.
    pub started: bool,
    /// Line color.
    pub color: &'a str,
    /// Arc height multiplier.
    pub arc_height: f64,
}

impl LineState<'_> {
    /// Arc samples drawn so far (see [`generate_arc_points`]).
    pub fn arc_points(&self, num_points: u32) -> ArcPoints {
        generate_arc_points(
            self.from,
            self.to,
            self.progress,
            self.arc_height,
            num_points,
        )
    }
}

/// Frame-indexed draw progress for a set of independent lines.
///
/// Every line is reported at every frame, in configuration order. Lines whose delay has not
/// elapsed yet come back with `progress = 0` and `started = false`; renderers that hide pending
/// lines filter on `started`.
#[derive(Clone, Debug)]
pub struct LineAnimator {
    clock: AnimationClock,
    lines: Vec<LineSegment>,
}

impl LineAnimator {
    /// Validate the lines and build the animator.
    #[tracing::instrument(skip(lines), fields(lines = lines.len()))]
    pub fn new(fps: Fps, total_secs: f64, lines: Vec<LineSegment>) -> JourneyResult<Self> {
        let clock = AnimationClock::new(fps, total_secs)?;
        for (i, line) in lines.iter().enumerate() {
            line.validate(i)?;
            if line.end_secs() > total_secs {
                tracing::warn!(
                    line = i,
                    end_secs = line.end_secs(),
                    total_secs,
                    "line finishes after the animation ends"
                );
            }
        }
        Ok(Self { clock, lines })
    }

    /// The configured lines.
    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Frame/time mapping.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Number of frames the render loop visits.
    pub fn total_frames(&self) -> u64 {
        self.clock.total_frames()
    }

    /// Draw state of every line at `frame`.
    pub fn line_states_at_frame(&self, frame: FrameIndex) -> Vec<LineState<'_>> {
        self.line_states_at_secs(self.clock.elapsed_secs(frame))
    }

    /// Draw state of every line at `elapsed` seconds.
    pub fn line_states_at_secs(&self, elapsed: f64) -> Vec<LineState<'_>> {
        self.lines
            .iter()
            .map(|line| {
                let progress = line.progress_at(elapsed);
                LineState {
                    from: &line.from,
                    to: &line.to,
                    progress: progress.unwrap_or(0.0),
                    started: progress.is_some(),
                    color: &line.color,
                    arc_height: line.arc_height,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/lines.rs"]
mod tests;
