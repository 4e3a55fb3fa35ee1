use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{JourneyError, JourneyResult};
use crate::scene::project::AnimationProject;
use crate::scene::{FrameState, SampleOptions, Scene};
use crate::session::player::{GlobeRenderer, PlaybackReport, play_scene};
use crate::session::sink::{FrameSink, SinkConfig};

/// Options controlling `RenderSession` sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSessionOpts {
    /// Per-frame sampling knobs.
    pub sample: SampleOptions,
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Highest camera altitude seen in the range, meters.
    pub peak_altitude: f64,
    /// Frames with a visible cloud layer.
    pub cloudy_frames: u64,
}

/// Session-oriented sampler for one animation.
///
/// A session builds the scene once, then provides per-frame state for single frames and ranges.
#[derive(Debug)]
pub struct RenderSession {
    id: String,
    scene: Scene,
    opts: RenderSessionOpts,
}

impl RenderSession {
    /// Validate `project` and build its scene.
    pub fn new(project: &AnimationProject, opts: RenderSessionOpts) -> JourneyResult<Self> {
        if project.id.trim().is_empty() {
            return Err(JourneyError::validation("animation id must be non-empty"));
        }
        let scene = Scene::from_project(project)?;
        Ok(Self {
            id: project.id.clone(),
            scene,
            opts,
        })
    }

    /// The scene being sampled.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of frames in the animation.
    pub fn total_frames(&self) -> u64 {
        self.scene.total_frames()
    }

    /// State of a single frame.
    pub fn render_frame(&self, frame: FrameIndex) -> JourneyResult<FrameState> {
        if frame.0 >= self.total_frames() {
            return Err(JourneyError::validation(format!(
                "frame {} is outside the animation (0..{})",
                frame.0,
                self.total_frames()
            )));
        }
        Ok(self.scene.frame_state(frame, self.opts.sample))
    }

    /// Sample a frame range and stream states into a sink.
    ///
    /// The sink receives frames in strictly increasing frame index order.
    #[tracing::instrument(skip(self, sink), fields(animation = %self.id, start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> JourneyResult<RenderStats> {
        self.check_range(range)?;
        sink.begin(SinkConfig {
            animation: self.id.clone(),
            fps: self.scene.fps(),
            total_frames: self.total_frames(),
        })?;

        let mut stats = RenderStats::default();
        for frame in range.iter() {
            let state = self.scene.frame_state(frame, self.opts.sample);
            stats.frames_total += 1;
            stats.peak_altitude = stats.peak_altitude.max(state.pose.altitude);
            if state.cloud_opacity > 0.0 {
                stats.cloudy_frames += 1;
            }
            sink.push_frame(frame, &state)?;
        }
        sink.end()?;

        tracing::info!(
            frames = stats.frames_total,
            peak_altitude = stats.peak_altitude,
            cloudy_frames = stats.cloudy_frames,
            "render range complete"
        );
        Ok(stats)
    }

    /// Drive a live renderer through a frame range.
    #[tracing::instrument(skip(self, renderer), fields(animation = %self.id, start = range.start.0, end = range.end.0))]
    pub fn play(
        &self,
        range: FrameRange,
        renderer: &mut dyn GlobeRenderer,
    ) -> JourneyResult<PlaybackReport> {
        self.check_range(range)?;
        play_scene(&self.scene, range, self.opts.sample, renderer)
    }

    fn check_range(&self, range: FrameRange) -> JourneyResult<()> {
        if range.is_empty() {
            return Err(JourneyError::validation("frame range must be non-empty"));
        }
        if range.end.0 > self.total_frames() {
            return Err(JourneyError::validation(format!(
                "frame range end {} is past the animation ({} frames)",
                range.end.0,
                self.total_frames()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
