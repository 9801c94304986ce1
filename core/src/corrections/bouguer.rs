use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::model::{ReferenceBody, StationPoint};
use crate::prelude::{CorrectionError, CorrectionModel, CorrectionResult};

/// Newtonian gravitational constant, m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Fixed cap radius in arc-length terms for the spherical-cap correction,
/// meters.
pub const CAP_ARC_LENGTH: f64 = 166_735.0;

/// Bouguer correction variants: the closed-form spherical cap after
/// LaFehr (1991), or the classic infinite-slab plate.
///
/// Both variants share the `2e8 * pi * rho * G` scale factor with the
/// crust density taken straight from the reference body. The store supplies
/// kg/m^3, which is roughly a factor 1000 above the textbook Bouguer
/// constant; the factor is reproduced as-is until the owners of the body
/// definitions confirm the intended unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BouguerModel {
    SphericalCap,
    Plate,
}

impl BouguerModel {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::SphericalCap),
            1 => Some(Self::Plate),
            _ => None,
        }
    }
}

impl CorrectionModel for BouguerModel {
    fn evaluate(&self, station: &StationPoint, body: &ReferenceBody) -> CorrectionResult<f64> {
        match self {
            Self::SphericalCap => spherical_cap(station, body),
            Self::Plate => Ok(2e8
                * PI
                * body.mean_crust_density()
                * GRAVITATIONAL_CONSTANT
                * station.height),
        }
    }
}

/// Closed-form spherical-cap correction. Term naming follows the published
/// derivation.
///
/// The logarithm is ill-conditioned when `cos(alpha)` approaches `delta`;
/// the argument is validated before the call so a malformed height or
/// latitude fails the station instead of leaking a non-finite value.
fn spherical_cap(station: &StationPoint, body: &ReferenceBody) -> CorrectionResult<f64> {
    let radius = body.radius_at_latitude(station.lat);
    let h = station.height;

    let eta = h / (radius + h);
    let mu = (1.0 / 3.0) * eta.powi(2) - eta;

    let alpha = CAP_ARC_LENGTH / radius;
    let delta = radius / (radius + h);

    let d = 3.0 * alpha.cos().powi(2) - 2.0;
    let f = alpha.cos();
    let k = alpha.sin().powi(2);
    let p = -6.0 * alpha.cos().powi(2) * (alpha / 2.0).sin() + 4.0 * (alpha / 2.0).sin().powi(3);
    let m = -3.0 * alpha.sin().powi(2) * alpha.cos();
    let n = 2.0 * ((alpha / 2.0).sin() - (alpha / 2.0).sin().powi(2));

    let root = ((f - delta).powi(2) + k).sqrt();
    let log_argument = n / (f - delta + root);
    if !log_argument.is_finite() || log_argument <= 0.0 {
        return Err(CorrectionError::NumericDomain(format!(
            "station {}: spherical-cap logarithm argument {} is degenerate at height {} m",
            station.id, log_argument, h
        )));
    }

    let term_1 = d + f * delta + delta.powi(2);
    let term_2 = root;
    let term_3 = p + m * log_argument.ln();

    let lambda = (1.0 / 3.0) * (term_1 * term_2 + term_3);
    let correction = 2e8 * PI * body.mean_crust_density() * GRAVITATIONAL_CONSTANT
        * ((1.0 + mu) * h - lambda * (radius + h));

    if !correction.is_finite() {
        return Err(CorrectionError::NumericDomain(format!(
            "station {}: spherical-cap correction is non-finite at height {} m",
            station.id, h
        )));
    }
    Ok(correction)
}
