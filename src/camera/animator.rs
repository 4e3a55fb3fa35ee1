use crate::animation::clock::AnimationClock;
use crate::camera::path::{FlightPath, FlightSegment};
use crate::camera::policy::{PathInterpolator, PathPolicy};
use crate::foundation::core::{CameraPose, Fps, FrameIndex};
use crate::foundation::error::JourneyResult;

/// At or below this global progress the start pose is returned verbatim.
pub const START_SNAP: f64 = 0.001;
/// At or above this global progress the final keyframe is returned verbatim.
pub const END_SNAP: f64 = 0.999;

/// Segment label reported once the path has finished.
pub const END_SEGMENT: &str = "end";

/// Pose at one instant plus the name of the leg being flown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample<'a> {
    /// Interpolated camera pose.
    pub pose: CameraPose,
    /// Active segment name, or [`END_SEGMENT`]. For display only.
    pub segment: &'a str,
}

/// Frame-indexed camera trajectory over a fixed [`FlightPath`].
///
/// Every query recomputes from the frame number; the only state is built once here.
#[derive(Debug)]
pub struct CameraPathAnimator {
    path: FlightPath,
    clock: AnimationClock,
    interpolator: Box<dyn PathInterpolator>,
}

impl CameraPathAnimator {
    /// Validate `start` + `segments` and build the animator.
    #[tracing::instrument(skip(start, segments), fields(segments = segments.len()))]
    pub fn new(
        fps: Fps,
        start: CameraPose,
        segments: Vec<FlightSegment>,
        policy: PathPolicy,
    ) -> JourneyResult<Self> {
        let path = FlightPath::new(start, segments)?;
        Self::from_path(path, fps, policy)
    }

    /// Build the animator for an already validated path.
    pub fn from_path(path: FlightPath, fps: Fps, policy: PathPolicy) -> JourneyResult<Self> {
        let clock = AnimationClock::new(fps, path.total_secs())?;
        if path.keyframes().iter().any(|k| k.altitude <= 0.0)
            && policy == PathPolicy::HermiteLogAltitude
        {
            tracing::warn!("non-positive keyframe altitude; affected legs blend altitude linearly");
        }
        let interpolator = policy.build(&path);
        tracing::debug!(
            ?policy,
            keyframes = path.keyframes().len(),
            total_secs = path.total_secs(),
            total_frames = clock.total_frames(),
            "built camera path"
        );
        Ok(Self {
            path,
            clock,
            interpolator,
        })
    }

    /// The keyframe table.
    pub fn path(&self) -> &FlightPath {
        &self.path
    }

    /// Frame/time mapping for this path.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Interpolation strategy in use.
    pub fn policy(&self) -> PathPolicy {
        self.interpolator.policy()
    }

    /// Total duration in seconds.
    pub fn total_secs(&self) -> f64 {
        self.path.total_secs()
    }

    /// Number of frames the render loop visits.
    pub fn total_frames(&self) -> u64 {
        self.clock.total_frames()
    }

    /// Start pose.
    pub fn start_pose(&self) -> CameraPose {
        *self.path.start()
    }

    /// Camera pose and active segment at `frame`. Frames past the end give the final pose.
    pub fn pose_at_frame(&self, frame: FrameIndex) -> PathSample<'_> {
        self.sample_progress(self.clock.progress(frame))
    }

    /// Camera pose at an arbitrary time in seconds; negative times clamp to the start.
    pub fn pose_at_secs(&self, secs: f64) -> PathSample<'_> {
        self.sample_progress(self.clock.progress_at_secs(secs))
    }

    fn sample_progress(&self, progress: f64) -> PathSample<'_> {
        if progress <= START_SNAP {
            return PathSample {
                pose: *self.path.start(),
                segment: self.path.segment_name(0),
            };
        }
        if progress >= END_SNAP {
            return PathSample {
                pose: *self.path.end(),
                segment: END_SEGMENT,
            };
        }

        let (idx, pose) = self.interpolator.interpolate(&self.path, progress);
        PathSample {
            pose,
            segment: self.path.segment_name(idx),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/animator.rs"]
mod tests;
