use serde::{Deserialize, Serialize};

use crate::model::{ReferenceBody, StationPoint};
use crate::prelude::{CorrectionModel, CorrectionResult};

/// Free-air correction variants. `Simplified` uses the constant-gradient
/// approximation; `Precise` carries the latitude and second-order height
/// terms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FreeAirModel {
    Simplified,
    Precise,
}

impl FreeAirModel {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Simplified),
            1 => Some(Self::Precise),
            _ => None,
        }
    }
}

impl CorrectionModel for FreeAirModel {
    fn evaluate(&self, station: &StationPoint, _body: &ReferenceBody) -> CorrectionResult<f64> {
        let h = station.height;
        match self {
            Self::Simplified => Ok(0.3086 * h),
            Self::Precise => Ok((0.3087691 - 0.0004398 * station.lat.sin().powi(2)) * h
                + 7.2125 * h.powi(2) * 1e-8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> ReferenceBody {
        ReferenceBody::new(6_371_000.0, 6_378_137.0, 6_356_752.0, 2670.0)
    }

    fn station_at_height(h: f64) -> StationPoint {
        StationPoint::from_degrees("fa", 45.0, 0.0, h, 0.0)
    }

    #[test]
    fn simplified_is_zero_at_datum() {
        let value = FreeAirModel::Simplified
            .evaluate(&station_at_height(0.0), &earth())
            .unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn simplified_increases_with_height() {
        let body = earth();
        let mut previous = 0.0;
        for h in [1.0, 10.0, 250.0, 1000.0, 4807.0] {
            let value = FreeAirModel::Simplified
                .evaluate(&station_at_height(h), &body)
                .unwrap();
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn simplified_at_kilometer_is_gradient_times_height() {
        let value = FreeAirModel::Simplified
            .evaluate(&station_at_height(1000.0), &earth())
            .unwrap();
        assert!((value - 308.6).abs() < 1e-9);
    }

    #[test]
    fn precise_matches_expanded_terms_at_mid_latitude() {
        let value = FreeAirModel::Precise
            .evaluate(&station_at_height(1000.0), &earth())
            .unwrap();
        // sin^2(45 deg) = 0.5
        let expected = (0.3087691 - 0.0004398 * 0.5) * 1000.0 + 7.2125 * 1000.0_f64.powi(2) * 1e-8;
        assert!((value - expected).abs() < 1e-9);
        assert!((value - 308.621325).abs() < 1e-6);
    }
}
