//! Correction formulas and reduction pipeline for the Rust gravimetry
//! platform.
//!
//! The modules mirror the legacy field-reduction workflow while providing
//! typed reference bodies, closed correction-variant sets, and a
//! well-defined per-station pipeline.

pub mod corrections;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod telemetry;

pub use prelude::{CorrectionModel, CorrectionSelection, StationCorrections};
