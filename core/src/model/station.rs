use serde::{Deserialize, Serialize};

/// Per-station geodetic and gravimetric data.
///
/// Latitude and longitude are held in radians; the conversion from the
/// degree input happens once at construction and is never redone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationPoint {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    /// Station elevation above the reference datum, meters.
    pub height: f64,
    /// Observed gravity, milligal.
    pub measurement: f64,
    /// Reduced gravity; populated from pipeline output only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_measurement: Option<f64>,
}

impl StationPoint {
    /// Builds a station from raw survey fields with angles in degrees.
    pub fn from_degrees(
        id: impl Into<String>,
        lat_deg: f64,
        lon_deg: f64,
        height: f64,
        measurement: f64,
    ) -> Self {
        Self {
            id: id.into(),
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
            height,
            measurement,
            corrected_measurement: None,
        }
    }
}
