use crate::foundation::error::{JourneyError, JourneyResult};

/// Absolute 0-based frame index in animation timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> JourneyResult<Self> {
        if start.0 > end.0 {
            return Err(JourneyError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range covering the first `frames` frames of a timeline.
    pub fn from_start(frames: u64) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(frames),
        }
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp a frame index into this range.
    ///
    /// Empty ranges clamp to `start`.
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }

    /// Iterate the frames of the range in increasing order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Frames-per-second represented as a rational `num/den`.
///
/// Deserializes from either a plain integer (`60`) or `{ "num": 30000, "den": 1001 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "FpsRepr", into = "FpsRepr")]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum FpsRepr {
    Whole(u32),
    Ratio { num: u32, den: u32 },
}

impl TryFrom<FpsRepr> for Fps {
    type Error = JourneyError;

    fn try_from(repr: FpsRepr) -> JourneyResult<Self> {
        match repr {
            FpsRepr::Whole(n) => Fps::new(n, 1),
            FpsRepr::Ratio { num, den } => Fps::new(num, den),
        }
    }
}

impl From<Fps> for FpsRepr {
    fn from(fps: Fps) -> Self {
        if fps.den == 1 {
            FpsRepr::Whole(fps.num)
        } else {
            FpsRepr::Ratio {
                num: fps.num,
                den: fps.den,
            }
        }
    }
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> JourneyResult<Self> {
        if den == 0 {
            return Err(JourneyError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(JourneyError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame index to elapsed seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Number of whole frames needed to cover `secs` (the frame at `secs` itself excluded).
    ///
    /// A tiny tolerance absorbs float noise so that `22.0 s @ 60` is exactly 1320 frames.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 0;
        }
        (secs * self.as_f64() - 1e-9).ceil().max(0.0) as u64
    }
}

/// One point of the camera trajectory: placement in degrees/meters and orientation in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    /// Longitude in degrees.
    #[serde(rename = "lon", alias = "longitude")]
    pub longitude: f64,
    /// Latitude in degrees.
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    /// Altitude above the ellipsoid in meters.
    #[serde(rename = "alt", alias = "altitude")]
    pub altitude: f64,
    /// Heading in degrees (0 = north).
    pub heading: f64,
    /// Pitch in degrees (-90 = looking straight down).
    pub pitch: f64,
}

impl CameraPose {
    /// Top-down pose (heading 0, pitch -90) above a point.
    pub fn top_down(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
            heading: 0.0,
            pitch: -90.0,
        }
    }

    /// Return `true` when every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && self.altitude.is_finite()
            && self.heading.is_finite()
            && self.pitch.is_finite()
    }

    /// Return `true` when both poses share the exact same longitude and latitude.
    pub fn same_ground_point(&self, other: &Self) -> bool {
        self.longitude == other.longitude && self.latitude == other.latitude
    }

    /// Euclidean distance across all five fields, used to measure frame-to-frame jumps.
    pub fn distance(&self, other: &Self) -> f64 {
        let d = [
            self.longitude - other.longitude,
            self.latitude - other.latitude,
            self.altitude - other.altitude,
            self.heading - other.heading,
            self.pitch - other.pitch,
        ];
        d.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

/// A named place on the globe.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(rename = "lon", alias = "longitude")]
    pub longitude: f64,
    /// Display name.
    pub name: String,
    /// Optional Chinese display name.
    #[serde(default, rename = "nameZh", skip_serializing_if = "Option::is_none")]
    pub name_zh: Option<String>,
}

impl Location {
    /// Create a location without a secondary name.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            name_zh: None,
        }
    }

    /// Attach a Chinese display name.
    pub fn with_name_zh(mut self, name_zh: impl Into<String>) -> Self {
        self.name_zh = Some(name_zh.into());
        self
    }
}

/// A sampled geographic position: degrees and meters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoSample {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Altitude in meters.
    pub alt: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
