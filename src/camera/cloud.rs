/// Altitude band (meters) in which the cloud layer is visible.
///
/// Opacity ramps up linearly over `[fade_in_start, full_start)`, holds at 1 over
/// `[full_start, full_end]`, ramps down over `(full_end, fade_out_end]` and is 0 elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CloudBand {
    /// Lowest altitude with any cloud.
    pub fade_in_start: f64,
    /// Start of the fully opaque band.
    pub full_start: f64,
    /// End of the fully opaque band.
    pub full_end: f64,
    /// Highest altitude with any cloud.
    pub fade_out_end: f64,
}

impl Default for CloudBand {
    fn default() -> Self {
        Self {
            fade_in_start: 1_000.0,
            full_start: 3_000.0,
            full_end: 6_000.0,
            fade_out_end: 15_000.0,
        }
    }
}

impl CloudBand {
    /// Cloud-layer opacity in `[0, 1]` for a camera at `altitude` meters.
    pub fn opacity(&self, altitude: f64) -> f64 {
        if altitude.is_nan() || altitude < self.fade_in_start || altitude > self.fade_out_end {
            return 0.0;
        }
        let o = if altitude < self.full_start {
            (altitude - self.fade_in_start) / (self.full_start - self.fade_in_start)
        } else if altitude <= self.full_end {
            1.0
        } else {
            1.0 - (altitude - self.full_end) / (self.fade_out_end - self.full_end)
        };
        o.clamp(0.0, 1.0)
    }
}

/// [`CloudBand::opacity`] with the default 1 km / 3 km / 6 km / 15 km band.
pub fn cloud_opacity(altitude: f64) -> f64 {
    CloudBand::default().opacity(altitude)
}

#[cfg(test)]
#[path = "../../tests/unit/camera/cloud.rs"]
mod tests;
