use crate::camera::path::FlightPath;
use crate::camera::policy::{PathInterpolator, PathPolicy};
use crate::foundation::core::CameraPose;
use crate::foundation::math::{hermite, log_lerp};

/// Per-keyframe rate of change, in units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tangent {
    /// Longitude velocity (deg/s).
    pub lon: f64,
    /// Latitude velocity (deg/s).
    pub lat: f64,
    /// Heading velocity (deg/s).
    pub heading: f64,
    /// Pitch velocity (deg/s).
    pub pitch: f64,
}

impl Tangent {
    fn scaled(self, secs: f64) -> Self {
        Self {
            lon: self.lon * secs,
            lat: self.lat * secs,
            heading: self.heading * secs,
            pitch: self.pitch * secs,
        }
    }
}

/// Cubic Hermite strategy with logarithmic altitude.
#[derive(Clone, Debug)]
pub struct HermiteLogAltitude {
    tangents: Vec<Tangent>,
}

impl HermiteLogAltitude {
    /// Precompute tangents for every keyframe of `path`.
    pub fn new(path: &FlightPath) -> Self {
        Self {
            tangents: compute_tangents(path),
        }
    }

    /// The tangent table, one entry per keyframe.
    pub fn tangents(&self) -> &[Tangent] {
        &self.tangents
    }
}

/// Central differences against absolute keyframe times.
///
/// A keyframe adjacent to a vertical leg gets zero lon/lat velocity so the spline cannot
/// overshoot sideways while climbing or diving.
fn compute_tangents(path: &FlightPath) -> Vec<Tangent> {
    let k = path.keyframes();
    let times = path.keyframe_times();
    let n = k.len();

    (0..n)
        .map(|i| {
            let prev = i.saturating_sub(1);
            let next = (i + 1).min(n - 1);
            let dt = times[next] - times[prev];

            let mut tan = if dt > 0.0 {
                Tangent {
                    lon: (k[next].longitude - k[prev].longitude) / dt,
                    lat: (k[next].latitude - k[prev].latitude) / dt,
                    heading: (k[next].heading - k[prev].heading) / dt,
                    pitch: (k[next].pitch - k[prev].pitch) / dt,
                }
            } else {
                Tangent::default()
            };

            let vertical_in = i > 0 && path.is_vertical(i - 1);
            let vertical_out = i + 1 < n && path.is_vertical(i);
            if vertical_in || vertical_out {
                tan.lon = 0.0;
                tan.lat = 0.0;
            }
            tan
        })
        .collect()
}

impl PathInterpolator for HermiteLogAltitude {
    fn policy(&self) -> PathPolicy {
        PathPolicy::HermiteLogAltitude
    }

    fn interpolate(&self, path: &FlightPath, progress: f64) -> (usize, CameraPose) {
        let secs = progress * path.total_secs();
        let (idx, t) = path.locate_time(secs);
        let times = path.keyframe_times();
        let span = times[idx + 1] - times[idx];

        let k = path.keyframes();
        let (p0, p1) = (&k[idx], &k[idx + 1]);
        let m0 = self.tangents[idx].scaled(span);
        let m1 = self.tangents[idx + 1].scaled(span);

        let pose = CameraPose {
            longitude: hermite(p0.longitude, p1.longitude, m0.lon, m1.lon, t),
            latitude: hermite(p0.latitude, p1.latitude, m0.lat, m1.lat, t),
            altitude: log_lerp(p0.altitude, p1.altitude, t),
            heading: hermite(p0.heading, p1.heading, m0.heading, m1.heading, t),
            pitch: hermite(p0.pitch, p1.pitch, m0.pitch, m1.pitch, t),
        };
        (idx, pose)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/hermite.rs"]
mod tests;
