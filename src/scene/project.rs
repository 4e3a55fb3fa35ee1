use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::camera::path::FlightSegment;
use crate::camera::policy::PathPolicy;
use crate::foundation::core::{CameraPose, Fps, Location};
use crate::foundation::error::{JourneyError, JourneyResult};
use crate::scene::Scene;
use crate::scene::globe::GlobeCameraConfig;
use crate::trail::lines::LineSegment;
use crate::trail::overlay::TrailConfig;

/// A named, JSON-editable animation: metadata plus the configuration of one scene kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationProject {
    /// Stable identifier, e.g. `01-london-to-shenzhen`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional Chinese display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_zh: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Scene kind and its configuration (`"type"` + `"config"` in JSON).
    #[serde(flatten)]
    pub kind: ProjectKind,
}

/// Scene configuration, tagged by animation type.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "kebab-case")]
pub enum ProjectKind {
    /// A camera flight along authored keyframes.
    Flight(FlightConfig),
    /// A globe with animated flight lines.
    GlobeLines(GlobeLineConfig),
}

/// Configuration of a flight scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Pose at t = 0.
    pub start_position: CameraPose,
    /// Authored legs, flown in order.
    pub segments: Vec<FlightSegment>,
    /// Interpolation policy.
    #[serde(default)]
    pub policy: PathPolicy,
    /// Optional airplane trail drawn in step with the flight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail: Option<TrailConfig>,
}

/// Configuration of a globe-lines scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeLineConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Camera behaviour.
    pub camera: GlobeCameraConfig,
    /// Animation length in seconds.
    pub total_duration: f64,
    /// Lines to draw.
    pub lines: Vec<LineSegment>,
    /// Static markers.
    #[serde(default)]
    pub markers: Vec<Location>,
}

impl AnimationProject {
    /// Parse a project from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> JourneyResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| JourneyError::serde(format!("parse animation JSON: {e}")))
    }

    /// Parse a project from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> JourneyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            JourneyError::Other(
                anyhow::Error::new(e)
                    .context(format!("open animation JSON '{}'", path.display())),
            )
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize the project as pretty JSON.
    pub fn to_json_pretty(&self) -> JourneyResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JourneyError::serde(format!("serialize animation JSON: {e}")))
    }

    /// `"flight"` or `"globe-lines"`.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ProjectKind::Flight(_) => "flight",
            ProjectKind::GlobeLines(_) => "globe-lines",
        }
    }

    /// Output frame rate of the configured scene.
    pub fn fps(&self) -> Fps {
        match &self.kind {
            ProjectKind::Flight(c) => c.fps,
            ProjectKind::GlobeLines(c) => c.fps,
        }
    }

    /// Check the project can be turned into a scene.
    pub fn validate(&self) -> JourneyResult<()> {
        if self.id.trim().is_empty() {
            return Err(JourneyError::validation("animation id must be non-empty"));
        }
        Scene::from_project(self).map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/project.rs"]
mod tests;
