use glam::DVec3;

use crate::animation::lerp::Lerp;
use crate::foundation::core::{GeoSample, Location};
use crate::foundation::error::{JourneyError, JourneyResult};
use crate::geo::arc::{Arc, TRAIL_ARC_FACTOR};
use crate::geo::to_ecef;

/// Direction reported when the two samples straddling the airplane coincide.
pub const DEFAULT_DIRECTION: DVec3 = DVec3::Z;

/// Differences shorter than this (meters) count as degenerate.
const MIN_DIRECTION_LEN: f64 = 1e-3;

/// Airplane trail configuration. Styling fields are carried for the renderer only.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailConfig {
    /// Origin of the flight.
    pub from: Location,
    /// Destination of the flight.
    pub to: Location,
    /// Arc height multiplier.
    pub arc_height: f64,
    /// Number of arc steps; the arc holds `num_points + 1` samples.
    pub num_points: u32,
    /// Trail line color.
    pub line_color: String,
    /// Trail line width in pixels.
    pub line_width: f64,
    /// Glow layer color.
    pub glow_color: String,
    /// Glow layer width in pixels.
    pub glow_width: f64,
    /// Airplane billboard scale.
    pub airplane_scale: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            from: Location::new("London", 51.5214, -0.1448),
            to: Location::new("Shenzhen", 22.6815, 113.839),
            arc_height: 1.0,
            num_points: 200,
            line_color: "#ffffff".to_owned(),
            line_width: 2.0,
            glow_color: "#C1272D".to_owned(),
            glow_width: 8.0,
            airplane_scale: 1.2,
        }
    }
}

/// A trail that grows along a precomputed arc as progress advances, with an airplane at its tip.
///
/// All queries are pure functions of the static arc and the requested progress; nothing is
/// accumulated between calls, so scrubbing backwards redraws correctly.
#[derive(Clone, Debug)]
pub struct TrailOverlay {
    config: TrailConfig,
    samples: Vec<GeoSample>,
    cartesian: Vec<DVec3>,
}

impl TrailOverlay {
    /// Precompute the arc for `config`.
    pub fn new(config: TrailConfig) -> JourneyResult<Self> {
        if config.num_points == 0 {
            return Err(JourneyError::validation("trail needs at least one arc step"));
        }
        if !config.arc_height.is_finite() || config.arc_height < 0.0 {
            return Err(JourneyError::validation(format!(
                "trail arc height must be >= 0, got {}",
                config.arc_height
            )));
        }
        let coords = [
            config.from.latitude,
            config.from.longitude,
            config.to.latitude,
            config.to.longitude,
        ];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(JourneyError::validation("trail endpoints must be finite"));
        }
        let arc = Arc::between(&config.from, &config.to, TRAIL_ARC_FACTOR, config.arc_height);
        let samples = arc.sample(config.num_points);
        let cartesian = samples.iter().map(to_ecef).collect();
        tracing::debug!(
            samples = samples.len(),
            max_height_m = arc.max_height_m(),
            "built trail arc"
        );
        Ok(Self {
            config,
            samples,
            cartesian,
        })
    }

    /// The configuration this trail was built from.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// The full arc.
    pub fn samples(&self) -> &[GeoSample] {
        &self.samples
    }

    fn steps(&self) -> usize {
        self.samples.len() - 1
    }

    /// Trail drawn up to `progress`: every arc sample up to `floor(progress * steps)` plus an
    /// interpolated tip. Empty at progress 0.
    pub fn positions(&self, progress: f64) -> Vec<GeoSample> {
        let p = clamp_unit(progress);
        if p <= 0.0 {
            return Vec::new();
        }
        let exact = p * self.steps() as f64;
        let floor = (exact.floor() as usize).min(self.steps());
        let mut out = self.samples[..=floor].to_vec();
        if floor < self.steps() {
            let tip = GeoSample::lerp(
                &self.samples[floor],
                &self.samples[floor + 1],
                exact - floor as f64,
            );
            out.push(tip);
        }
        out
    }

    /// Airplane position: the trail tip, or the origin before the trail starts.
    pub fn airplane_position(&self, progress: f64) -> GeoSample {
        self.positions(progress)
            .last()
            .copied()
            .unwrap_or(self.samples[0])
    }

    /// Unit flight direction (Earth-centred coordinates) of the arc step under `progress`.
    pub fn direction(&self, progress: f64) -> DVec3 {
        let p = clamp_unit(progress);
        let steps = self.steps();
        let idx = ((p * steps as f64).floor() as usize).min(steps - 1);
        let d = self.cartesian[idx + 1] - self.cartesian[idx];
        if d.length() < MIN_DIRECTION_LEN {
            return DEFAULT_DIRECTION;
        }
        d.normalize()
    }
}

fn clamp_unit(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/overlay.rs"]
mod tests;
