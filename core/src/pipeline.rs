use std::collections::HashMap;

use rayon::prelude::*;

use crate::model::{ReferenceBody, StationPoint};
use crate::prelude::{
    CorrectionError, CorrectionModel, CorrectionSelection, StationCorrections,
};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::{MetricsRecorder, ReductionTally};

/// A station whose evaluation failed. The rest of the batch is unaffected.
#[derive(Debug)]
pub struct StationFailure {
    pub id: String,
    pub error: CorrectionError,
}

/// Output of a pipeline run: id-keyed result records plus the stations that
/// were skipped on numeric-domain failures.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub results: HashMap<String, StationCorrections>,
    pub failures: Vec<StationFailure>,
}

/// Evaluates the selected correction variants for every station and combines
/// them into the final anomaly.
pub struct CorrectionPipeline {
    selection: CorrectionSelection,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl CorrectionPipeline {
    pub fn new(selection: CorrectionSelection) -> Self {
        Self {
            selection,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Runs the reduction over the whole batch. Stations are independent,
    /// so evaluation fans out across worker threads and merges into the
    /// id-keyed result map afterwards.
    pub fn compute(&self, stations: &[StationPoint], body: &ReferenceBody) -> BatchResult {
        let evaluated: Vec<(String, Result<StationCorrections, CorrectionError>)> = stations
            .par_iter()
            .map(|station| (station.id.clone(), self.evaluate_station(station, body)))
            .collect();

        let mut batch = BatchResult::default();
        for (id, outcome) in evaluated {
            match outcome {
                Ok(corrections) => {
                    self.metrics.record_reduced();
                    batch.results.insert(id, corrections);
                }
                Err(error) => {
                    self.metrics.record_skipped();
                    self.logger
                        .warn(&format!("station {} skipped: {}", id, error));
                    batch.failures.push(StationFailure { id, error });
                }
            }
        }

        self.logger.record(&format!(
            "reduction batch complete: {} stations reduced, {} skipped",
            batch.results.len(),
            batch.failures.len()
        ));
        batch
    }

    /// Session totals across all batches run through this pipeline.
    pub fn tally(&self) -> ReductionTally {
        self.metrics.snapshot()
    }

    fn evaluate_station(
        &self,
        station: &StationPoint,
        body: &ReferenceBody,
    ) -> Result<StationCorrections, CorrectionError> {
        let normal_gravity = Self::contribution(self.selection.normal_gravity, station, body)?;
        let free_air = Self::contribution(self.selection.free_air, station, body)?;
        let atmospheric = Self::contribution(self.selection.atmospheric, station, body)?;
        let bouguer = Self::contribution(self.selection.bouguer, station, body)?;

        // Free-air and atmospheric reduce the observation to the datum;
        // normal gravity and Bouguer remove the modeled gravity.
        let anomaly = station.measurement + free_air + atmospheric - bouguer - normal_gravity;

        Ok(StationCorrections {
            normal_gravity,
            free_air,
            atmospheric,
            bouguer,
            anomaly,
        })
    }

    fn contribution<M: CorrectionModel>(
        model: Option<M>,
        station: &StationPoint,
        body: &ReferenceBody,
    ) -> Result<f64, CorrectionError> {
        match model {
            Some(model) => model.evaluate(station, body),
            None => Ok(0.0),
        }
    }
}

/// Writes each reduced anomaly back onto its station record. Only pipeline
/// output ever populates `corrected_measurement`.
pub fn apply_reduced(stations: &mut [StationPoint], batch: &BatchResult) {
    for station in stations.iter_mut() {
        if let Some(corrections) = batch.results.get(&station.id) {
            station.corrected_measurement = Some(corrections.anomaly);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrections::{AtmosphericModel, BouguerModel, FreeAirModel, NormalGravityModel};
    use crate::prelude::SelectionConfig;

    fn earth() -> ReferenceBody {
        ReferenceBody::new(6_371_000.0, 6_378_137.0, 6_356_752.0, 2670.0)
    }

    fn survey_station() -> StationPoint {
        StationPoint::from_degrees("S1", 45.0, 0.0, 1000.0, 979_800.0)
    }

    fn full_selection() -> CorrectionSelection {
        CorrectionSelection {
            normal_gravity: Some(NormalGravityModel::Grs80),
            free_air: Some(FreeAirModel::Simplified),
            atmospheric: Some(AtmosphericModel::Standard),
            bouguer: Some(BouguerModel::Plate),
        }
    }

    #[test]
    fn all_disabled_reduces_anomaly_to_measurement() {
        let pipeline = CorrectionPipeline::new(CorrectionSelection::disabled());
        let batch = pipeline.compute(&[survey_station()], &earth());

        let corrections = &batch.results["S1"];
        assert_eq!(corrections.normal_gravity, 0.0);
        assert_eq!(corrections.free_air, 0.0);
        assert_eq!(corrections.atmospheric, 0.0);
        assert_eq!(corrections.bouguer, 0.0);
        assert_eq!(corrections.anomaly, 979_800.0);
    }

    #[test]
    fn unmatched_index_contributes_zero() {
        let config = SelectionConfig {
            normal_gravity: Some(0),
            free_air: Some(99),
            ..Default::default()
        };
        let pipeline = CorrectionPipeline::new(config.resolve());
        let batch = pipeline.compute(&[survey_station()], &earth());

        let corrections = &batch.results["S1"];
        assert_eq!(corrections.free_air, 0.0);
        assert!(corrections.normal_gravity > 0.0);
    }

    #[test]
    fn full_run_matches_component_formulas() {
        let pipeline = CorrectionPipeline::new(full_selection());
        let batch = pipeline.compute(&[survey_station()], &earth());

        assert!(batch.failures.is_empty());
        let corrections = &batch.results["S1"];
        assert!((corrections.free_air - 308.6).abs() < 1e-9);
        assert!((corrections.atmospheric - 0.77856).abs() < 1e-12);

        let recombined = 979_800.0 + corrections.free_air + corrections.atmospheric
            - corrections.bouguer
            - corrections.normal_gravity;
        assert!((corrections.anomaly - recombined).abs() < 1e-9);
    }

    #[test]
    fn compute_is_idempotent() {
        let pipeline = CorrectionPipeline::new(full_selection());
        let stations = vec![
            survey_station(),
            StationPoint::from_degrees("S2", -12.5, 33.0, 250.0, 979_650.25),
        ];
        let body = earth();

        let first = pipeline.compute(&stations, &body);
        let second = pipeline.compute(&stations, &body);
        assert_eq!(first.results, second.results);
    }

    #[test]
    fn degenerate_station_is_skipped_without_poisoning_batch() {
        let selection = CorrectionSelection {
            bouguer: Some(BouguerModel::SphericalCap),
            ..CorrectionSelection::disabled()
        };
        let pipeline = CorrectionPipeline::new(selection);
        let body = earth();

        let radius = body.radius_at_latitude(45.0_f64.to_radians());
        let stations = vec![
            survey_station(),
            StationPoint::from_degrees("BAD", 45.0, 0.0, -radius, 979_000.0),
        ];

        let batch = pipeline.compute(&stations, &body);
        assert_eq!(batch.results.len(), 1);
        assert!(batch.results.contains_key("S1"));
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].id, "BAD");
        assert!(matches!(
            batch.failures[0].error,
            CorrectionError::NumericDomain(_)
        ));
        assert_eq!(pipeline.tally().skipped, 1);
    }

    #[test]
    fn apply_reduced_populates_corrected_measurement() {
        let pipeline = CorrectionPipeline::new(full_selection());
        let mut stations = vec![survey_station()];
        let batch = pipeline.compute(&stations, &earth());

        apply_reduced(&mut stations, &batch);
        let expected = batch.results["S1"].anomaly;
        assert_eq!(stations[0].corrected_measurement, Some(expected));
    }
}
