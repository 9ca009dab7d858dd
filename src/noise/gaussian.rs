use ndarray::{Array1, ArrayView1};
use rand::RngCore;
use rand_distr::{Distribution, Normal};

use super::{check_level, NoiseFn};
use crate::error::Result;

/// Additive gaussian noise, `y + N(0, level)`.
#[derive(Debug, Clone)]
pub struct Gaussian {
    distribution: Option<Normal<f32>>,
}

impl Gaussian {
    /// Creates a new `Gaussian` noise function.
    ///
    /// # Arguments
    /// * `level` - The standard deviation of the noise.
    ///
    /// # Returns
    /// An error if `level` is negative or not finite.
    pub fn new(level: f32) -> Result<Self> {
        let level = check_level(level)?;
        let distribution = if level > 0. {
            Some(Normal::new(0., level)?)
        } else {
            None
        };

        Ok(Self { distribution })
    }
}

impl NoiseFn for Gaussian {
    fn apply(&self, ys: ArrayView1<f32>, rng: &mut dyn RngCore) -> Array1<f32> {
        let Some(distribution) = &self.distribution else {
            return ys.to_owned();
        };

        ys.mapv(|y| y + distribution.sample(rng))
    }
}
