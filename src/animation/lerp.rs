use crate::foundation::core::{CameraPose, GeoSample};
use crate::foundation::math;

/// Field-wise interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (t = 0) and `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        math::lerp(*a, *b, t)
    }
}

impl Lerp for CameraPose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            longitude: math::lerp(a.longitude, b.longitude, t),
            latitude: math::lerp(a.latitude, b.latitude, t),
            altitude: math::lerp(a.altitude, b.altitude, t),
            heading: math::lerp(a.heading, b.heading, t),
            pitch: math::lerp(a.pitch, b.pitch, t),
        }
    }
}

impl Lerp for GeoSample {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            lon: math::lerp(a.lon, b.lon, t),
            lat: math::lerp(a.lat, b.lat, t),
            alt: math::lerp(a.alt, b.alt, t),
        }
    }
}

/// Catmull-Rom through `p1 -> p2`, applied independently to every pose field.
pub(crate) fn catmull_rom_pose(
    p0: &CameraPose,
    p1: &CameraPose,
    p2: &CameraPose,
    p3: &CameraPose,
    t: f64,
) -> CameraPose {
    let f = |get: fn(&CameraPose) -> f64| math::catmull_rom(get(p0), get(p1), get(p2), get(p3), t);
    CameraPose {
        longitude: f(|p| p.longitude),
        latitude: f(|p| p.latitude),
        altitude: f(|p| p.altitude),
        heading: f(|p| p.heading),
        pitch: f(|p| p.pitch),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
