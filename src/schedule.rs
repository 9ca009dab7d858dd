use std::num::NonZeroUsize;

use crate::error::{Result, SweepErr};

pub const DEFAULT_PATIENCE: usize = 10;
pub const DEFAULT_FACTOR: f32 = 0.5;
pub const DEFAULT_MIN_LR: f32 = 1e-6;

/// Decays the learning rate after a run of non improving steps.
///
/// A step improves when its loss is lower than the best loss seen so far minus `min_delta`.
/// After `patience` consecutive steps without improvement the learning rate gets multiplied by
/// `factor`, never going below `min_lr`, and the count starts over.
#[derive(Debug, Clone)]
pub struct Patience {
    patience: NonZeroUsize,
    factor: f32,
    min_lr: f32,
    min_delta: f32,

    best: f32,
    wait: usize,
    decays: usize,
}

impl Patience {
    /// Creates a new `Patience` schedule.
    ///
    /// # Arguments
    /// * `patience` - The amount of non improving steps tolerated before a decay.
    /// * `factor` - The multiplier applied to the learning rate on decay, in `(0, 1)`.
    /// * `min_lr` - The floor of the learning rate.
    ///
    /// # Returns
    /// An error if any of the arguments is out of its range.
    pub fn new(patience: usize, factor: f32, min_lr: f32) -> Result<Self> {
        let patience = NonZeroUsize::new(patience).ok_or_else(|| {
            SweepErr::InvalidConfig("patience must be greater than 0".into())
        })?;

        if !(factor > 0. && factor < 1.) {
            return Err(SweepErr::InvalidParam {
                what: "decay factor",
                value: factor,
            });
        }

        if !min_lr.is_finite() || min_lr < 0. {
            return Err(SweepErr::InvalidParam {
                what: "min learning rate",
                value: min_lr,
            });
        }

        Ok(Self {
            patience,
            factor,
            min_lr,
            min_delta: 0.,
            best: f32::INFINITY,
            wait: 0,
            decays: 0,
        })
    }

    /// Sets the margin a loss has to beat the best one by to count as an improvement.
    pub fn with_min_delta(mut self, min_delta: f32) -> Result<Self> {
        if !min_delta.is_finite() || min_delta < 0. {
            return Err(SweepErr::InvalidParam {
                what: "min delta",
                value: min_delta,
            });
        }

        self.min_delta = min_delta;
        Ok(self)
    }

    /// Feeds the loss of a step to the schedule.
    ///
    /// # Arguments
    /// * `loss` - The loss of the step, non finite losses never improve.
    /// * `learning_rate` - The learning rate currently in use.
    ///
    /// # Returns
    /// The decayed learning rate if a decay is due.
    pub fn observe(&mut self, loss: f32, learning_rate: f32) -> Option<f32> {
        if loss.is_finite() && loss < self.best - self.min_delta {
            self.best = loss;
            self.wait = 0;
            return None;
        }

        self.wait += 1;
        if self.wait < self.patience.get() {
            return None;
        }

        self.wait = 0;
        let decayed = (learning_rate * self.factor).max(self.min_lr);
        if decayed >= learning_rate {
            return None;
        }

        self.decays += 1;
        Some(decayed)
    }

    /// Returns the best loss observed, infinite before any finite loss.
    pub fn best(&self) -> f32 {
        self.best
    }

    /// Returns the amount of decays applied so far.
    pub fn decays(&self) -> usize {
        self.decays
    }
}
