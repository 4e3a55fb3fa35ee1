use crate::animation::lerp::{Lerp, catmull_rom_pose};
use crate::camera::path::FlightPath;
use crate::camera::policy::{PathInterpolator, PathPolicy};
use crate::foundation::core::CameraPose;
use crate::foundation::math::smoothstep;

/// Fraction of the timeline eased at each end.
pub const EDGE_EASE_WINDOW: f64 = 0.08;

/// Segment-classified Catmull-Rom strategy.
///
/// Takeoff (first segment), landing (last two segments) and any leg over a single ground point
/// are straight lerps; the rest go through a 4-point Catmull-Rom with clamped outer indices.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentedCatmullRom;

impl SegmentedCatmullRom {
    /// Smoothstep the first and last [`EDGE_EASE_WINDOW`] of progress, identity in between.
    pub fn ease_edges(t: f64) -> f64 {
        let w = EDGE_EASE_WINDOW;
        if t < w {
            smoothstep(t / w) * w
        } else if t > 1.0 - w {
            (1.0 - w) + smoothstep((t - (1.0 - w)) / w) * w
        } else {
            t
        }
    }

    /// `true` when segment `idx` is interpolated linearly.
    pub fn is_linear_segment(path: &FlightPath, idx: usize) -> bool {
        idx == 0 || idx + 2 >= path.segment_count() || path.is_vertical(idx)
    }
}

impl PathInterpolator for SegmentedCatmullRom {
    fn policy(&self) -> PathPolicy {
        PathPolicy::SegmentedCatmullRom
    }

    fn interpolate(&self, path: &FlightPath, progress: f64) -> (usize, CameraPose) {
        let eased = Self::ease_edges(progress);
        let (idx, t) = path.locate_fraction(eased);
        let k = path.keyframes();
        let (p1, p2) = (&k[idx], &k[idx + 1]);

        if Self::is_linear_segment(path, idx) {
            return (idx, CameraPose::lerp(p1, p2, t));
        }

        let p0 = &k[idx.saturating_sub(1)];
        let p3 = &k[(idx + 2).min(k.len() - 1)];
        (idx, catmull_rom_pose(p0, p1, p2, p3, t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/catmull.rs"]
mod tests;
