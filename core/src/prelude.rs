use serde::{Deserialize, Serialize};

use crate::corrections::{AtmosphericModel, BouguerModel, FreeAirModel, NormalGravityModel};
use crate::model::{ReferenceBody, StationPoint};

/// Raw per-category variant indices as read from configuration.
///
/// A missing key, or an index matching no known variant, disables the
/// category: it contributes exactly 0.0 to the anomaly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(rename = "NORMAL_GRAVITY")]
    pub normal_gravity: Option<i64>,
    #[serde(rename = "FREE_AIR")]
    pub free_air: Option<i64>,
    #[serde(rename = "ATMOSPHERIC")]
    pub atmospheric: Option<i64>,
    #[serde(rename = "BOUGUER")]
    pub bouguer: Option<i64>,
}

impl SelectionConfig {
    /// Resolves the raw indices into the closed variant sets, warning on
    /// values that match nothing.
    pub fn resolve(&self) -> CorrectionSelection {
        CorrectionSelection {
            normal_gravity: resolve_variant(
                "NORMAL_GRAVITY",
                self.normal_gravity,
                NormalGravityModel::from_index,
            ),
            free_air: resolve_variant("FREE_AIR", self.free_air, FreeAirModel::from_index),
            atmospheric: resolve_variant(
                "ATMOSPHERIC",
                self.atmospheric,
                AtmosphericModel::from_index,
            ),
            bouguer: resolve_variant("BOUGUER", self.bouguer, BouguerModel::from_index),
        }
    }
}

fn resolve_variant<M>(
    category: &str,
    index: Option<i64>,
    from_index: fn(i64) -> Option<M>,
) -> Option<M> {
    let index = index?;
    let variant = from_index(index);
    if variant.is_none() {
        log::warn!(
            "{} index {} matches no known variant; category disabled",
            category,
            index
        );
    }
    variant
}

/// Resolved variant choice per correction category. `None` means the
/// category is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrectionSelection {
    pub normal_gravity: Option<NormalGravityModel>,
    pub free_air: Option<FreeAirModel>,
    pub atmospheric: Option<AtmosphericModel>,
    pub bouguer: Option<BouguerModel>,
}

impl CorrectionSelection {
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Immutable per-station result record, assembled once all four categories
/// have been evaluated. Values are in milligal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationCorrections {
    pub normal_gravity: f64,
    #[serde(rename = "free_air_correction")]
    pub free_air: f64,
    #[serde(rename = "atmospheric_correction")]
    pub atmospheric: f64,
    #[serde(rename = "bouguer_correction")]
    pub bouguer: f64,
    pub anomaly: f64,
}

/// Common error type for reduction runs.
#[derive(thiserror::Error, Debug)]
pub enum CorrectionError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("numeric domain violation: {0}")]
    NumericDomain(String),
}

pub type CorrectionResult<T> = Result<T, CorrectionError>;

/// Trait implemented by every correction category's variant set.
pub trait CorrectionModel {
    fn evaluate(&self, station: &StationPoint, body: &ReferenceBody) -> CorrectionResult<f64>;
}
