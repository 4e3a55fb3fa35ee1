use crate::foundation::core::{CameraPose, FrameRange, GeoSample, Location};
use crate::foundation::error::JourneyResult;
use crate::scene::{SampleOptions, Scene};

/// Arc resolution used for live playback when none is configured.
pub const DEFAULT_ARC_POINTS: u32 = 100;

/// Polyline id used for a flight's trail; line polylines use their configuration index.
pub const TRAIL_POLYLINE: usize = usize::MAX;

/// A live globe the player drives frame by frame.
pub trait GlobeRenderer {
    /// Pin static markers. Called once before the first frame.
    fn place_markers(&mut self, markers: &[Location]) -> JourneyResult<()>;
    /// Move the camera.
    fn set_camera(&mut self, pose: &CameraPose) -> JourneyResult<()>;
    /// Altitude the renderer reports for its camera after the last move, if it can tell.
    fn camera_altitude(&self) -> Option<f64>;
    /// Set the cloud layer opacity in `[0, 1]`.
    fn set_cloud_opacity(&mut self, opacity: f64);
    /// Replace the polyline `id` with `points`.
    fn draw_polyline(&mut self, id: usize, color: &str, points: &[GeoSample]) -> JourneyResult<()>;
    /// Present the current frame.
    fn present(&mut self) -> JourneyResult<()> {
        Ok(())
    }
}

/// Outcome of a playback run.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackReport {
    /// Frames presented.
    pub frames: u64,
    /// Playback percentage after the run (always `100`).
    pub percent: f64,
    /// Last altitude polled back from the renderer.
    pub last_altitude: Option<f64>,
}

impl PlaybackReport {
    /// Human readable altitude readout (`--` when the renderer never reported one).
    pub fn altitude_readout(&self) -> String {
        self.last_altitude
            .map(format_altitude)
            .unwrap_or_else(|| "--".to_owned())
    }
}

/// Format an altitude for an on-screen readout.
pub fn format_altitude(alt: f64) -> String {
    if alt > 1_000_000.0 {
        format!("{:.1}k km", alt / 1_000_000.0)
    } else if alt > 1000.0 {
        format!("{:.1} km", alt / 1000.0)
    } else {
        format!("{alt:.0} m")
    }
}

pub(crate) fn play_scene(
    scene: &Scene,
    range: FrameRange,
    sample: SampleOptions,
    renderer: &mut dyn GlobeRenderer,
) -> JourneyResult<PlaybackReport> {
    let sample = SampleOptions {
        arc_points: Some(sample.arc_points.unwrap_or(DEFAULT_ARC_POINTS)),
    };
    let trail_color = match scene {
        Scene::Flight(f) => f.trail().map(|t| t.config().line_color.as_str()),
        Scene::GlobeLines(_) => None,
    };

    renderer.place_markers(scene.markers())?;
    renderer.set_camera(&scene.start_pose())?;
    renderer.present()?;

    let mut report = PlaybackReport {
        frames: 0,
        percent: 0.0,
        last_altitude: None,
    };
    for frame in range.iter() {
        let state = scene.frame_state(frame, sample);
        renderer.set_camera(&state.pose)?;
        renderer.set_cloud_opacity(state.cloud_opacity);
        for (id, line) in state.lines.iter().enumerate().filter(|(_, l)| l.started) {
            renderer.draw_polyline(id, &line.color, &line.points)?;
        }
        if let (Some(trail), Some(color)) = (&state.trail, trail_color) {
            renderer.draw_polyline(TRAIL_POLYLINE, color, &trail.positions)?;
        }
        renderer.present()?;

        report.frames += 1;
        report.percent = state.percent;
        if let Some(alt) = renderer.camera_altitude() {
            report.last_altitude = Some(alt);
        }
    }

    renderer.set_cloud_opacity(0.0);
    report.percent = 100.0;
    tracing::info!(
        frames = report.frames,
        altitude = %report.altitude_readout(),
        "playback complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
