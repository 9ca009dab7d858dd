use std::{fs::File, io::BufWriter, path::Path};

use log::info;

use crate::{
    config::SweepConfig,
    error::Result,
    training::{TrainerBuilder, TrainingReport},
};

/// Runs every configuration of the sweep in order.
///
/// # Returns
/// One report per run, in the same order as `config.runs`, or the first error found.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<TrainingReport>> {
    config.validate()?;

    let builder = TrainerBuilder::new(config.data.build()?);
    let total = config.runs.len();
    info!("running {total} configurations");

    config
        .runs
        .iter()
        .enumerate()
        .map(|(i, run)| {
            info!("[{}/{total}] {}", i + 1, run.name);
            builder.build(run)?.train()
        })
        .collect()
}

/// Returns the run whose line ended closest to the clean one.
pub fn best_by_clean_loss(reports: &[TrainingReport]) -> Option<&TrainingReport> {
    reports
        .iter()
        .filter(|r| r.clean_mse.is_finite())
        .min_by(|a, b| a.clean_mse.total_cmp(&b.clean_mse))
}

/// Writes the reports as pretty printed JSON.
pub fn write_json<P: AsRef<Path>>(reports: &[TrainingReport], path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, reports)?;
    Ok(())
}
