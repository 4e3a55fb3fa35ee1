//! Geographic helpers: great-circle distance estimates, parabolic arcs and Earth-centred
//! coordinates for direction vectors.

pub(crate) mod arc;

use crate::foundation::core::{GeoSample, Location};
use glam::DVec3;

/// Mean Earth radius used by the Haversine estimate, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const WGS84_A: f64 = 6_378_137.0;
const WGS84_E2: f64 = 6.694_379_990_141_316e-3;

/// Great-circle distance between two points in kilometers (Haversine formula).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// [`haversine_km`] between two [`Location`]s.
pub fn distance_km(from: &Location, to: &Location) -> f64 {
    haversine_km(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Earth-centred, Earth-fixed position of a sample on the WGS84 ellipsoid, in meters.
pub fn to_ecef(s: &GeoSample) -> DVec3 {
    let (lat, lon) = (s.lat.to_radians(), s.lon.to_radians());
    let (sin_lat, cos_lat) = lat.sin_cos();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    DVec3::new(
        (n + s.alt) * cos_lat * lon.cos(),
        (n + s.alt) * cos_lat * lon.sin(),
        (n * (1.0 - WGS84_E2) + s.alt) * sin_lat,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geo/distance.rs"]
mod tests;
