use super::TrainingReport;
use crate::error::Result;

/// A fully configured training run.
pub trait Trainer {
    /// Runs every step of the training and reports its outcome.
    fn train(&mut self) -> Result<TrainingReport>;
}
