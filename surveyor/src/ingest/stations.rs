use anyhow::Context;
use gravcore::model::StationPoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw survey record as found in exported station files. The aliases cover
/// the column spellings commonly seen in field exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStationRecord {
    #[serde(alias = "point_id")]
    pub id: String,
    #[serde(alias = "latitude", alias = "y")]
    pub lat: f64,
    #[serde(alias = "longitude", alias = "long", alias = "x")]
    pub lon: f64,
    #[serde(alias = "height", alias = "elev", alias = "alt")]
    pub h: f64,
    #[serde(alias = "grav", alias = "reading", alias = "g_mgal")]
    pub measurement: f64,
}

impl RawStationRecord {
    /// Angles in the raw record are degrees; the conversion to radians
    /// happens here, exactly once.
    pub fn to_station(&self) -> StationPoint {
        StationPoint::from_degrees(self.id.clone(), self.lat, self.lon, self.h, self.measurement)
    }
}

pub fn load_raw_records<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RawStationRecord>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading station records {}", path_ref.display()))?;
    let records: Vec<RawStationRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing station records {}", path_ref.display()))?;
    Ok(records)
}

pub fn to_stations(records: &[RawStationRecord]) -> Vec<StationPoint> {
    records.iter().map(RawStationRecord::to_station).collect()
}
