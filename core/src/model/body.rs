use serde::{Deserialize, Serialize};

/// Raw geometric and density parameters of a reference body, as stored in
/// the body-definition store. Radii in meters, density in kg/m^3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyParams {
    pub r_mean: f64,
    pub r_equator: f64,
    pub r_pole: f64,
    pub mean_crust_density: f64,
}

/// Reference body with its derived flattening. Immutable once built; the
/// flattening is computed at construction and never recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceBody {
    r_mean: f64,
    r_equator: f64,
    r_pole: f64,
    mean_crust_density: f64,
    flattening: f64,
}

impl ReferenceBody {
    pub fn new(r_mean: f64, r_equator: f64, r_pole: f64, mean_crust_density: f64) -> Self {
        let flattening = (r_equator - r_pole) / r_equator;
        Self {
            r_mean,
            r_equator,
            r_pole,
            mean_crust_density,
            flattening,
        }
    }

    pub fn from_params(params: &BodyParams) -> Self {
        Self::new(
            params.r_mean,
            params.r_equator,
            params.r_pole,
            params.mean_crust_density,
        )
    }

    pub fn r_mean(&self) -> f64 {
        self.r_mean
    }

    pub fn r_equator(&self) -> f64 {
        self.r_equator
    }

    pub fn r_pole(&self) -> f64 {
        self.r_pole
    }

    /// Mean upper-crust density, kg/m^3.
    pub fn mean_crust_density(&self) -> f64 {
        self.mean_crust_density
    }

    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// Radius of the body at a given latitude under the oblate-spheroid
    /// approximation.
    pub fn radius_at_latitude(&self, lat_rad: f64) -> f64 {
        self.r_equator * (1.0 - self.flattening * lat_rad.sin().powi(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn earth() -> ReferenceBody {
        ReferenceBody::new(6_371_000.0, 6_378_137.0, 6_356_752.0, 2670.0)
    }

    #[test]
    fn flattening_derived_from_radii() {
        let body = earth();
        let expected = (6_378_137.0 - 6_356_752.0) / 6_378_137.0;
        assert_eq!(body.flattening(), expected);
    }

    #[test]
    fn radius_at_equator_is_equatorial_radius() {
        let body = earth();
        assert_eq!(body.radius_at_latitude(0.0), body.r_equator());
    }

    #[test]
    fn radius_at_pole_approaches_polar_radius() {
        let body = earth();
        let polar = body.radius_at_latitude(FRAC_PI_2);
        assert!((polar - body.r_pole()).abs() < 1e-6);
    }
}
