use crate::foundation::core::{GeoSample, Location};
use crate::geo::distance_km;

/// Arc height factor for globe flight lines (fraction of ground distance).
pub const LINE_ARC_FACTOR: f64 = 0.15;
/// Arc height factor for the airplane trail overlay.
pub const TRAIL_ARC_FACTOR: f64 = 0.12;

/// A parabolic arc between two ground points.
///
/// Longitude and latitude are interpolated linearly; altitude follows `4t(1-t) * max_height`,
/// peaking at the midpoint. `max_height` grows with ground distance so that intercontinental
/// arcs bulge higher than short hops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    from: (f64, f64),
    to: (f64, f64),
    max_height_m: f64,
}

impl Arc {
    /// Arc between two locations with `max_height = distance_km * factor * arc_height * 1000`.
    pub fn between(from: &Location, to: &Location, factor: f64, arc_height: f64) -> Self {
        Self {
            from: (from.longitude, from.latitude),
            to: (to.longitude, to.latitude),
            max_height_m: distance_km(from, to) * factor * arc_height * 1000.0,
        }
    }

    /// Peak altitude in meters, reached at `t = 0.5`.
    pub fn max_height_m(&self) -> f64 {
        self.max_height_m
    }

    /// Point at parameter `t` in `[0, 1]`.
    pub fn at(&self, t: f64) -> GeoSample {
        GeoSample {
            lon: self.from.0 + (self.to.0 - self.from.0) * t,
            lat: self.from.1 + (self.to.1 - self.from.1) * t,
            alt: 4.0 * t * (1.0 - t) * self.max_height_m,
        }
    }

    /// All `resolution + 1` evenly spaced samples from `t = 0` to `t = 1`.
    pub fn sample(&self, resolution: u32) -> Vec<GeoSample> {
        let n = resolution.max(1);
        (0..=n).map(|i| self.at(f64::from(i) / f64::from(n))).collect()
    }
}

/// Lazily generated prefix of an [`Arc`] sampled at `resolution` steps.
///
/// Holds no buffer: iterating again restarts from the first sample, and nothing is computed
/// until the iterator is driven.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPoints {
    arc: Arc,
    resolution: u32,
    last: u32,
}

impl ArcPoints {
    /// Number of samples the sequence yields.
    pub fn len(&self) -> usize {
        self.last as usize + 1
    }

    /// Always `false`; at least three samples are produced.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The underlying full arc.
    pub fn arc(&self) -> &Arc {
        &self.arc
    }

    /// Iterate the samples from the origin towards the current tip.
    pub fn iter(&self) -> ArcPointsIter {
        ArcPointsIter {
            points: *self,
            next: 0,
        }
    }
}

impl IntoIterator for ArcPoints {
    type Item = GeoSample;
    type IntoIter = ArcPointsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ArcPoints {
    type Item = GeoSample;
    type IntoIter = ArcPointsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`ArcPoints`].
#[derive(Clone, Debug)]
pub struct ArcPointsIter {
    points: ArcPoints,
    next: u64,
}

impl Iterator for ArcPointsIter {
    type Item = GeoSample;

    fn next(&mut self) -> Option<GeoSample> {
        if self.next > u64::from(self.points.last) {
            return None;
        }
        let t = self.next as f64 / f64::from(self.points.resolution);
        self.next += 1;
        Some(self.points.arc.at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.points.last) + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcPointsIter {}

/// Samples of a globe flight line drawn up to `progress`.
///
/// Sample `i` sits at `t = i / num_points` for `i` in `0..=max(2, floor(num_points * progress))`,
/// so the materialized line grows as progress advances. The first few samples are always
/// present so the renderer has a drawable polyline even at progress 0.
pub fn generate_arc_points(
    from: &Location,
    to: &Location,
    progress: f64,
    arc_height: f64,
    num_points: u32,
) -> ArcPoints {
    let resolution = num_points.max(2);
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let grown = (f64::from(resolution) * progress).floor() as u32;
    ArcPoints {
        arc: Arc::between(from, to, LINE_ARC_FACTOR, arc_height),
        resolution,
        last: grown.clamp(2, resolution),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/arc.rs"]
mod tests;
