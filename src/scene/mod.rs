pub mod catalog;
pub(crate) mod globe;
pub(crate) mod project;

use crate::animation::clock::AnimationClock;
use crate::camera::animator::CameraPathAnimator;
use crate::camera::cloud::cloud_opacity;
use crate::foundation::core::{CameraPose, Fps, FrameIndex, FrameRange, GeoSample, Location};
use crate::foundation::error::JourneyResult;
use crate::scene::globe::GlobeLineScene;
use crate::scene::project::{AnimationProject, ProjectKind};
use crate::trail::lines::LineState;
use crate::trail::overlay::TrailOverlay;

/// Segment label reported by scenes without authored segments.
pub const GLOBE_SEGMENT: &str = "globe";

/// Per-frame sampling knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleOptions {
    /// Materialize arc samples for each line with this resolution. `None` skips geometry.
    pub arc_points: Option<u32>,
}

/// A camera flight, optionally with a growing airplane trail.
#[derive(Debug)]
pub struct FlightScene {
    camera: CameraPathAnimator,
    trail: Option<TrailOverlay>,
}

impl FlightScene {
    /// Pair a camera animator with an optional trail.
    pub fn new(camera: CameraPathAnimator, trail: Option<TrailOverlay>) -> Self {
        Self { camera, trail }
    }

    /// The camera animator.
    pub fn camera(&self) -> &CameraPathAnimator {
        &self.camera
    }

    /// The trail overlay, if configured.
    pub fn trail(&self) -> Option<&TrailOverlay> {
        self.trail.as_ref()
    }
}

/// A ready-to-sample animation.
#[derive(Debug)]
pub enum Scene {
    /// Camera flight.
    Flight(FlightScene),
    /// Globe with flight lines.
    GlobeLines(GlobeLineScene),
}

impl Scene {
    /// Validate `project` and build its scene.
    #[tracing::instrument(skip(project), fields(id = %project.id, kind = project.kind_name()))]
    pub fn from_project(project: &AnimationProject) -> JourneyResult<Self> {
        let scene = match &project.kind {
            ProjectKind::Flight(c) => {
                let camera = CameraPathAnimator::new(
                    c.fps,
                    c.start_position,
                    c.segments.clone(),
                    c.policy,
                )?;
                let trail = c.trail.clone().map(TrailOverlay::new).transpose()?;
                Self::Flight(FlightScene::new(camera, trail))
            }
            ProjectKind::GlobeLines(c) => Self::GlobeLines(GlobeLineScene::new(
                c.fps,
                c.camera.clone(),
                c.total_duration,
                c.lines.clone(),
                c.markers.clone(),
            )?),
        };
        tracing::debug!(total_frames = scene.total_frames(), "scene built");
        Ok(scene)
    }

    /// Frame/time mapping.
    pub fn clock(&self) -> &AnimationClock {
        match self {
            Self::Flight(s) => s.camera.clock(),
            Self::GlobeLines(s) => s.lines().clock(),
        }
    }

    /// Output frame rate.
    pub fn fps(&self) -> Fps {
        self.clock().fps()
    }

    /// Number of frames the render loop visits.
    pub fn total_frames(&self) -> u64 {
        self.clock().total_frames()
    }

    /// Every frame, `[0, total_frames)`.
    pub fn frame_range(&self) -> FrameRange {
        self.clock().frame_range()
    }

    /// Pose to place the camera at before the first frame.
    pub fn start_pose(&self) -> CameraPose {
        match self {
            Self::Flight(s) => s.camera.start_pose(),
            Self::GlobeLines(s) => s.start_pose(),
        }
    }

    /// Static markers to pin on the globe.
    pub fn markers(&self) -> &[Location] {
        match self {
            Self::Flight(_) => &[],
            Self::GlobeLines(s) => s.markers(),
        }
    }

    /// Everything a renderer needs to draw `frame`.
    pub fn frame_state(&self, frame: FrameIndex, opts: SampleOptions) -> FrameState {
        let clock = self.clock();
        let elapsed_secs = clock.elapsed_secs(frame);
        let progress = clock.progress(frame);
        let total = clock.total_frames();
        let percent = if total == 0 {
            0.0
        } else {
            (frame.0.min(total) as f64 / total as f64) * 100.0
        };

        let (pose, segment, lines, trail) = match self {
            Self::Flight(s) => {
                let sample = s.camera.pose_at_frame(frame);
                let trail = s.trail.as_ref().map(|t| TrailSnapshot::of(t, progress, opts));
                (sample.pose, sample.segment.to_owned(), Vec::new(), trail)
            }
            Self::GlobeLines(s) => {
                let lines = s
                    .lines()
                    .line_states_at_secs(elapsed_secs)
                    .iter()
                    .map(|state| LineSnapshot::of(state, opts))
                    .collect();
                (s.pose_at_secs(elapsed_secs), GLOBE_SEGMENT.to_owned(), lines, None)
            }
        };
        FrameState {
            frame,
            elapsed_secs,
            progress,
            percent,
            pose,
            segment,
            cloud_opacity: cloud_opacity(pose.altitude),
            lines,
            trail,
        }
    }
}

/// Draw state of one line inside a [`FrameState`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSnapshot {
    /// Origin name.
    pub from: String,
    /// Destination name.
    pub to: String,
    /// Draw progress in `[0, 1]`.
    pub progress: f64,
    /// `false` while the line waits for its delay.
    pub started: bool,
    /// Line color.
    pub color: String,
    /// Arc samples drawn so far, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<GeoSample>,
}

impl LineSnapshot {
    fn of(state: &LineState<'_>, opts: SampleOptions) -> Self {
        let points = match opts.arc_points {
            Some(n) if state.started => state.arc_points(n).into_iter().collect(),
            _ => Vec::new(),
        };
        Self {
            from: state.from.name.clone(),
            to: state.to.name.clone(),
            progress: state.progress,
            started: state.started,
            color: state.color.to_owned(),
            points,
        }
    }
}

/// Trail state inside a [`FrameState`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailSnapshot {
    /// Airplane position at the trail tip.
    pub airplane: GeoSample,
    /// Unit heading in Earth-centered coordinates.
    pub direction: [f64; 3],
    /// Trail polyline, when geometry was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<GeoSample>,
}

impl TrailSnapshot {
    fn of(trail: &TrailOverlay, progress: f64, opts: SampleOptions) -> Self {
        let positions = if opts.arc_points.is_some() {
            trail.positions(progress)
        } else {
            Vec::new()
        };
        Self {
            airplane: trail.airplane_position(progress),
            direction: trail.direction(progress).to_array(),
            positions,
        }
    }
}

/// Serializable snapshot of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameState {
    /// Frame number.
    pub frame: FrameIndex,
    /// Seconds since the start.
    pub elapsed_secs: f64,
    /// Global progress in `[0, 1]`.
    pub progress: f64,
    /// Playback percentage shown by a progress bar (`frame / total_frames * 100`).
    pub percent: f64,
    /// Camera pose.
    pub pose: CameraPose,
    /// Active segment label.
    pub segment: String,
    /// Cloud layer opacity for the camera altitude.
    pub cloud_opacity: f64,
    /// Line snapshots, in configuration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineSnapshot>,
    /// Trail snapshot, for flights with a trail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail: Option<TrailSnapshot>,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mod.rs"]
mod tests;
