use std::fmt;

use crate::camera::catmull::SegmentedCatmullRom;
use crate::camera::hermite::HermiteLogAltitude;
use crate::camera::path::FlightPath;
use crate::foundation::core::CameraPose;

/// Which interpolation strategy a [`crate::CameraPathAnimator`] uses.
///
/// The two strategies draw visibly different paths for the same keyframes; both remove the
/// horizontal drift a plain spline shows on climb/dive legs, by different means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathPolicy {
    /// Smoothstep easing on the outer 8% of the timeline; linear takeoff, landing and vertical
    /// legs; Catmull-Rom on everything else (altitude included).
    SegmentedCatmullRom,
    /// Cubic Hermite on lon/lat/heading/pitch with zeroed ground tangents next to vertical legs,
    /// logarithmic altitude.
    #[default]
    HermiteLogAltitude,
}

impl PathPolicy {
    /// Build the interpolator for `path`, precomputing whatever tables the strategy needs.
    pub fn build(self, path: &FlightPath) -> Box<dyn PathInterpolator> {
        match self {
            Self::SegmentedCatmullRom => Box::new(SegmentedCatmullRom),
            Self::HermiteLogAltitude => Box::new(HermiteLogAltitude::new(path)),
        }
    }
}

/// Maps global progress strictly inside `(0, 1)` to a segment index and pose.
///
/// Boundary snapping is done by the caller; implementations only see interior progress.
pub trait PathInterpolator: fmt::Debug + Send + Sync {
    /// Tag of this strategy.
    fn policy(&self) -> PathPolicy;

    /// Segment index and interpolated pose at `progress`.
    fn interpolate(&self, path: &FlightPath, progress: f64) -> (usize, CameraPose);
}
