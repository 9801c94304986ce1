use serde::{Deserialize, Serialize};

use crate::model::{ReferenceBody, StationPoint};
use crate::prelude::{CorrectionModel, CorrectionResult};

/// Atmospheric correction models.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AtmosphericModel {
    Standard,
}

impl AtmosphericModel {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Standard),
            _ => None,
        }
    }
}

impl CorrectionModel for AtmosphericModel {
    /// Gravitational effect of the air column above the station, in
    /// milligal.
    fn evaluate(&self, station: &StationPoint, _body: &ReferenceBody) -> CorrectionResult<f64> {
        match self {
            Self::Standard => {
                let h = station.height;
                Ok(0.874 - 9.9e-5 * h + 3.56e-9 * h.powi(2))
            }
        }
    }
}
