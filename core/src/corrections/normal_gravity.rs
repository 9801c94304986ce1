use serde::{Deserialize, Serialize};

use crate::model::{ReferenceBody, StationPoint};
use crate::prelude::{CorrectionModel, CorrectionResult};

/// Normal-gravity model enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NormalGravityModel {
    Grs80,
}

impl NormalGravityModel {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Grs80),
            _ => None,
        }
    }
}

impl CorrectionModel for NormalGravityModel {
    /// Theoretical gravity at the station latitude on the reference
    /// ellipsoid, in milligal.
    fn evaluate(&self, station: &StationPoint, _body: &ReferenceBody) -> CorrectionResult<f64> {
        match self {
            Self::Grs80 => {
                let lat = station.lat;
                Ok(978032.67715
                    * (1.0 + 0.00530244 * lat.sin().powi(2)
                        - 0.0000058495 * (2.0 * lat).sin().powi(2)))
            }
        }
    }
}
