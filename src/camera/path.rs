use crate::foundation::core::CameraPose;
use crate::foundation::error::{JourneyError, JourneyResult};
use crate::foundation::math::ratio_or_zero;

/// One authored leg of a flight: fly to `to` over `duration` seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlightSegment {
    /// Display name of the leg (shown while it plays).
    pub name: String,
    /// Length of the leg in seconds, strictly positive.
    pub duration: f64,
    /// Keyframe reached at the end of the leg.
    pub to: CameraPose,
}

impl FlightSegment {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, duration: f64, to: CameraPose) -> Self {
        Self {
            name: name.into(),
            duration,
            to,
        }
    }
}

/// A validated, immutable keyframe table: `[start, seg_1.to, .., seg_n.to]` with the absolute
/// timestamp of every keyframe.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightPath {
    segments: Vec<FlightSegment>,
    keyframes: Vec<CameraPose>,
    times: Vec<f64>,
    fractions: Vec<f64>,
}

impl FlightPath {
    /// Validate and flatten a start pose plus its segments.
    ///
    /// Fails when there is no segment, when a duration is not a positive finite number, or
    /// when any pose field is not finite.
    pub fn new(start: CameraPose, segments: Vec<FlightSegment>) -> JourneyResult<Self> {
        if segments.is_empty() {
            return Err(JourneyError::validation(
                "flight path needs a start pose and at least one segment",
            ));
        }
        if !start.is_finite() {
            return Err(JourneyError::validation("start pose must be finite"));
        }

        let mut keyframes = Vec::with_capacity(segments.len() + 1);
        let mut times = Vec::with_capacity(segments.len() + 1);
        keyframes.push(start);
        times.push(0.0);

        let mut acc = 0.0;
        for (i, seg) in segments.iter().enumerate() {
            if !seg.duration.is_finite() || seg.duration <= 0.0 {
                return Err(JourneyError::validation(format!(
                    "segment {i} ('{}') duration must be > 0, got {}",
                    seg.name, seg.duration
                )));
            }
            if !seg.to.is_finite() {
                return Err(JourneyError::validation(format!(
                    "segment {i} ('{}') target pose must be finite",
                    seg.name
                )));
            }
            acc += seg.duration;
            keyframes.push(seg.to);
            times.push(acc);
        }

        let fractions = times.iter().map(|t| t / acc).collect();

        Ok(Self {
            segments,
            keyframes,
            times,
            fractions,
        })
    }

    /// The authored segments.
    pub fn segments(&self) -> &[FlightSegment] {
        &self.segments
    }

    /// Keyframe poses, start included.
    pub fn keyframes(&self) -> &[CameraPose] {
        &self.keyframes
    }

    /// Absolute time of every keyframe in seconds; `times[0] == 0`.
    pub fn keyframe_times(&self) -> &[f64] {
        &self.times
    }

    /// Keyframe times divided by the total duration.
    pub fn cumulative_fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Start pose.
    pub fn start(&self) -> &CameraPose {
        &self.keyframes[0]
    }

    /// Final keyframe.
    pub fn end(&self) -> &CameraPose {
        &self.keyframes[self.keyframes.len() - 1]
    }

    /// Sum of segment durations in seconds.
    pub fn total_secs(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Number of segments (keyframes minus one).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Name of segment `idx`, or `"end"` past the last one.
    pub fn segment_name(&self, idx: usize) -> &str {
        self.segments.get(idx).map_or("end", |s| s.name.as_str())
    }

    /// `true` when segment `idx` starts and ends over the same ground point (pure climb/dive).
    pub fn is_vertical(&self, idx: usize) -> bool {
        match (self.keyframes.get(idx), self.keyframes.get(idx + 1)) {
            (Some(a), Some(b)) => a.same_ground_point(b),
            _ => false,
        }
    }

    /// Segment containing absolute time `secs` plus the local parameter within it.
    pub(crate) fn locate_time(&self, secs: f64) -> (usize, f64) {
        locate(&self.times, secs)
    }

    /// Segment containing normalized progress `p` plus the local parameter within it.
    pub(crate) fn locate_fraction(&self, p: f64) -> (usize, f64) {
        locate(&self.fractions, p)
    }
}

/// First span `[marks[i], marks[i + 1]]` containing `x`, falling back to the last span when
/// float noise leaves `x` past the final mark.
fn locate(marks: &[f64], x: f64) -> (usize, f64) {
    let spans = marks.len() - 1;
    let idx = marks[1..].partition_point(|&end| end < x).min(spans - 1);
    let (start, end) = (marks[idx], marks[idx + 1]);
    let local = ratio_or_zero(x - start, end - start).clamp(0.0, 1.0);
    (idx, local)
}

#[cfg(test)]
#[path = "../../tests/unit/camera/path.rs"]
mod tests;
