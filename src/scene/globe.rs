use crate::foundation::core::{CameraPose, Fps, FrameIndex, Location};
use crate::foundation::error::{JourneyError, JourneyResult};
use crate::foundation::math::lerp;
use crate::trail::lines::{LineAnimator, LineSegment};

/// Default follow-mode altitude in meters.
pub const DEFAULT_FOLLOW_ALT: f64 = 5_000_000.0;
/// Default follow-mode pitch in degrees.
pub const DEFAULT_FOLLOW_PITCH: f64 = -60.0;

/// Camera behaviour for a globe-lines scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeCameraConfig {
    /// Rotation-mode longitude at t = 0.
    pub lon: f64,
    /// Rotation-mode latitude.
    pub lat: f64,
    /// Rotation-mode altitude in meters.
    pub alt: f64,
    /// Rotation speed in degrees of longitude per second.
    #[serde(default)]
    pub rotation_speed: f64,
    /// Track the first line instead of rotating.
    #[serde(default)]
    pub follow_line: bool,
    /// Follow-mode altitude (default [`DEFAULT_FOLLOW_ALT`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_alt: Option<f64>,
    /// Follow-mode pitch (default [`DEFAULT_FOLLOW_PITCH`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_pitch: Option<f64>,
}

/// A globe with animated flight lines and either a slowly rotating or a line-following camera.
#[derive(Clone, Debug)]
pub struct GlobeLineScene {
    camera: GlobeCameraConfig,
    lines: LineAnimator,
    markers: Vec<Location>,
}

impl GlobeLineScene {
    /// Validate and build the scene.
    pub fn new(
        fps: Fps,
        camera: GlobeCameraConfig,
        total_secs: f64,
        lines: Vec<LineSegment>,
        markers: Vec<Location>,
    ) -> JourneyResult<Self> {
        let numbers = [camera.lon, camera.lat, camera.alt, camera.rotation_speed];
        if numbers.iter().any(|v| !v.is_finite()) {
            return Err(JourneyError::validation("globe camera values must be finite"));
        }
        if camera.follow_line && lines.is_empty() {
            tracing::warn!("camera set to follow a line but the scene has none; rotating instead");
        }
        let lines = LineAnimator::new(fps, total_secs, lines)?;
        Ok(Self {
            camera,
            lines,
            markers,
        })
    }

    /// The line animator.
    pub fn lines(&self) -> &LineAnimator {
        &self.lines
    }

    /// Static markers to pin on the globe.
    pub fn markers(&self) -> &[Location] {
        &self.markers
    }

    /// Camera configuration.
    pub fn camera(&self) -> &GlobeCameraConfig {
        &self.camera
    }

    fn followed_line(&self) -> Option<&LineSegment> {
        if self.camera.follow_line {
            self.lines.lines().first()
        } else {
            None
        }
    }

    /// Camera pose at t = 0.
    pub fn start_pose(&self) -> CameraPose {
        self.pose_at_secs(0.0)
    }

    /// Camera pose at `frame`.
    pub fn pose_at_frame(&self, frame: FrameIndex) -> CameraPose {
        self.pose_at_secs(self.lines.clock().elapsed_secs(frame))
    }

    /// Camera pose at `secs`.
    ///
    /// Follow mode moves over the followed line's ground track at the line's own (linear) draw
    /// progress, so the camera stays above the growing tip. Rotation mode spins the globe
    /// underneath a top-down camera.
    pub fn pose_at_secs(&self, secs: f64) -> CameraPose {
        let secs = if secs.is_nan() { 0.0 } else { secs.max(0.0) };
        match self.followed_line() {
            Some(line) => {
                let p = line.progress_at(secs).unwrap_or(0.0);
                CameraPose {
                    longitude: lerp(line.from.longitude, line.to.longitude, p),
                    latitude: lerp(line.from.latitude, line.to.latitude, p),
                    altitude: self.camera.follow_alt.unwrap_or(DEFAULT_FOLLOW_ALT),
                    heading: 0.0,
                    pitch: self.camera.follow_pitch.unwrap_or(DEFAULT_FOLLOW_PITCH),
                }
            }
            None => CameraPose::top_down(
                self.camera.lon + secs * self.camera.rotation_speed,
                self.camera.lat,
                self.camera.alt,
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/globe.rs"]
mod tests;
