use anyhow::Context;
use clap::Parser;
use gravcore::prelude::SelectionConfig;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod ingest;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing gravimetric reduction driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// JSON file with raw station records (angles in degrees)
    #[arg(long)]
    stations: Option<PathBuf>,
    /// Reference body to resolve from the definitions store
    #[arg(long, default_value = "Earth")]
    planet: String,
    /// JSON store of reference-body definitions
    #[arg(long, default_value = "planets_definitions.json")]
    planets_file: PathBuf,
    /// Where to write the reduced records
    #[arg(long)]
    output: Option<PathBuf>,
    /// Normal-gravity variant index (0 = GRS80); omit to disable
    #[arg(long)]
    normal_gravity: Option<i64>,
    /// Free-air variant index (0 = simplified, 1 = precise); omit to disable
    #[arg(long)]
    free_air: Option<i64>,
    /// Atmospheric variant index (0 = standard); omit to disable
    #[arg(long)]
    atmospheric: Option<i64>,
    /// Bouguer variant index (0 = spherical cap, 1 = plate); omit to disable
    #[arg(long)]
    bouguer: Option<i64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        let stations = args
            .stations
            .context("--stations is required when no --workflow config is given")?;
        let methods = SelectionConfig {
            normal_gravity: args.normal_gravity,
            free_air: args.free_air,
            atmospheric: args.atmospheric,
            bouguer: args.bouguer,
        };
        WorkflowConfig::from_args(stations, args.planet, args.planets_file, args.output, methods)
    };

    let runner = Runner::new(config);
    let summary = runner.execute()?;

    println!(
        "Reduction run -> {} stations reduced, {} skipped, output {}",
        summary.reduced,
        summary.skipped,
        summary.output_path.display()
    );

    Ok(())
}
