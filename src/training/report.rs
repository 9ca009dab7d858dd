use serde::Serialize;

/// The outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub name: String,
    pub slope: f32,
    pub intercept: f32,
    /// The run's loss over the noisy targets after the last step.
    pub train_loss: f32,
    /// The mean squared error against the clean targets after the last step.
    pub clean_mse: f32,
    /// The loss of every step, measured before its update.
    pub losses: Vec<f32>,
    /// The learning rate in use after every step.
    pub learning_rates: Vec<f32>,
    pub decays: usize,
    pub skipped: usize,
}

impl TrainingReport {
    /// Returns the learning rate the run ended with.
    pub fn final_learning_rate(&self) -> Option<f32> {
        self.learning_rates.last().copied()
    }
}
