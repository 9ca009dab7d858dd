use std::num::NonZeroUsize;

use log::{debug, info, warn};

use super::{Trainer, TrainingReport};
use crate::{
    dataset::Dataset,
    error::Result,
    loss::{LossFn, Mse},
    model::LinearModel,
    optimization::Optimizer,
    schedule::Patience,
};

/// Trains a `LinearModel` with full batch gradient descent.
pub struct LinearTrainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    name: String,
    model: LinearModel,
    optimizer: O,
    loss_fn: L,
    schedule: Option<Patience>,
    dataset: Dataset,
    steps: NonZeroUsize,
}

impl<O, L> LinearTrainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `LinearTrainer`.
    ///
    /// # Arguments
    /// * `name` - The name the run reports with.
    /// * `model` - The starting point of the model.
    /// * `optimizer` - The optimizer that dictates how to update the parameters on each step.
    /// * `loss_fn` - The loss function.
    /// * `schedule` - The learning rate decay, if any.
    /// * `dataset` - The data the model will be trained with.
    /// * `steps` - The amount of gradient steps.
    pub fn new(
        name: String,
        model: LinearModel,
        optimizer: O,
        loss_fn: L,
        schedule: Option<Patience>,
        dataset: Dataset,
        steps: NonZeroUsize,
    ) -> Self {
        Self {
            name,
            model,
            optimizer,
            loss_fn,
            schedule,
            dataset,
            steps,
        }
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Performs a single step, returns the loss before the update and whether it was applied.
    fn step(&mut self, step: usize) -> Result<(f32, bool)> {
        let (loss, grad) =
            self.model
                .gradient(self.dataset.xs(), self.dataset.ys(), &self.loss_fn)?;

        let applied = grad.iter().all(|g| g.is_finite());
        if applied {
            self.optimizer.update_params(&grad, self.model.params_mut())?;
        } else {
            warn!(run = self.name.as_str(), step = step; "non finite gradient, skipping update");
        }

        if let Some(schedule) = self.schedule.as_mut() {
            let lr = self.optimizer.learning_rate();
            if let Some(decayed) = schedule.observe(loss, lr) {
                debug!(run = self.name.as_str(), step = step; "decaying learning rate {lr} -> {decayed}");
                self.optimizer.set_learning_rate(decayed);
            }
        }

        Ok((loss, applied))
    }
}

impl<O, L> Trainer for LinearTrainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    fn train(&mut self) -> Result<TrainingReport> {
        let steps = self.steps.get();
        let mut losses = Vec::with_capacity(steps);
        let mut learning_rates = Vec::with_capacity(steps);
        let mut skipped = 0;

        info!(run = self.name.as_str(), steps = steps; "starting run");

        for step in 0..steps {
            let (loss, applied) = self.step(step)?;
            if !applied {
                skipped += 1;
            }

            losses.push(loss);
            learning_rates.push(self.optimizer.learning_rate());
        }

        let y_pred = self.model.forward(self.dataset.xs());
        let train_loss = self.loss_fn.loss(y_pred.view(), self.dataset.ys());
        let clean_mse = Mse.loss(y_pred.view(), self.dataset.clean());

        info!(
            run = self.name.as_str(),
            slope = self.model.slope(),
            intercept = self.model.intercept();
            "finished run, loss={train_loss} clean_mse={clean_mse}"
        );

        Ok(TrainingReport {
            name: self.name.clone(),
            slope: self.model.slope(),
            intercept: self.model.intercept(),
            train_loss,
            clean_mse,
            losses,
            learning_rates,
            decays: self.schedule.as_ref().map_or(0, Patience::decays),
            skipped,
        })
    }
}
