use crate::ingest::stations::{load_raw_records, to_stations, RawStationRecord};
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use gravcore::model::BodyStore;
use gravcore::pipeline::{apply_reduced, BatchResult, CorrectionPipeline};
use gravcore::prelude::StationCorrections;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of a finished reduction run.
#[derive(Debug)]
pub struct RunSummary {
    pub reduced: usize,
    pub skipped: usize,
    pub output_path: PathBuf,
}

/// One exported row: the input record with its correction columns attached.
#[derive(Serialize)]
struct ReducedRecord<'a> {
    #[serde(flatten)]
    record: &'a RawStationRecord,
    #[serde(flatten)]
    corrections: &'a StationCorrections,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Resolves the reference body, reduces the whole batch, and exports the
    /// augmented records. An unknown body name aborts before any station is
    /// processed; stations with degenerate numerics are skipped and counted.
    pub fn execute(&self) -> anyhow::Result<RunSummary> {
        let store = BodyStore::load(&self.config.planets_file)
            .context("loading reference-body definitions")?;
        let body = store
            .resolve(&self.config.planet)
            .context("resolving reference body")?;
        log::info!(
            "resolved reference body '{}' (flattening {:.6})",
            self.config.planet,
            body.flattening()
        );

        let raw_records = load_raw_records(&self.config.stations)?;
        let mut stations = to_stations(&raw_records);

        let pipeline = CorrectionPipeline::new(self.config.to_selection());
        let batch = pipeline.compute(&stations, &body);
        apply_reduced(&mut stations, &batch);

        let output_path = self.config.output_path();
        write_reduced(&output_path, &raw_records, &batch)
            .with_context(|| format!("writing reduced records {}", output_path.display()))?;

        Ok(RunSummary {
            reduced: batch.results.len(),
            skipped: batch.failures.len(),
            output_path,
        })
    }
}

fn write_reduced(
    path: &Path,
    records: &[RawStationRecord],
    batch: &BatchResult,
) -> anyhow::Result<()> {
    let rows: Vec<ReducedRecord> = records
        .iter()
        .filter_map(|record| {
            batch
                .results
                .get(&record.id)
                .map(|corrections| ReducedRecord {
                    record,
                    corrections,
                })
        })
        .collect();

    let contents = serde_json::to_string_pretty(&rows)?;
    fs::write(path, contents)?;
    Ok(())
}
