use ndarray::{Array1, ArrayView1};

use super::{sign, LossFn};
use crate::error::{Result, SweepErr};

/// Huber loss: quadratic for residuals up to `delta`, linear past it.
#[derive(Debug, Clone, Copy)]
pub struct Huber {
    delta: f32,
}

impl Huber {
    /// Returns a new `Huber`.
    ///
    /// # Arguments
    /// * `delta` - The residual magnitude where the loss switches from quadratic to linear.
    ///
    /// # Returns
    /// An error if `delta` is not a positive finite number.
    pub fn new(delta: f32) -> Result<Self> {
        if !delta.is_finite() || delta <= 0. {
            return Err(SweepErr::InvalidParam {
                what: "huber delta",
                value: delta,
            });
        }

        Ok(Self { delta })
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl LossFn for Huber {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        let d = self.delta;

        (&y_pred - &y)
            .mapv(|r| {
                let a = r.abs();
                if a <= d {
                    0.5 * r * r
                } else {
                    d * (a - 0.5 * d)
                }
            })
            .mean()
            .unwrap_or_default()
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        let d = self.delta;
        let n = y_pred.len() as f32;

        (&y_pred - &y).mapv(|r| {
            let g = if r.abs() <= d { r } else { d * sign(r) };
            g / n
        })
    }
}
