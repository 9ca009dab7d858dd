use ndarray::{Array1, ArrayView1};
use rand::RngCore;
use rand_distr::{Distribution, Uniform as UniformDistr};

use super::{check_level, NoiseFn};
use crate::error::Result;

/// Additive uniform noise, `y + U(-level, level)`.
#[derive(Debug, Clone)]
pub struct Uniform {
    distribution: Option<UniformDistr<f32>>,
}

impl Uniform {
    /// Creates a new `Uniform` noise function.
    ///
    /// # Arguments
    /// * `level` - The half width of the noise interval.
    ///
    /// # Returns
    /// An error if `level` is negative or not finite.
    pub fn new(level: f32) -> Result<Self> {
        let level = check_level(level)?;
        let distribution = if level > 0. {
            Some(UniformDistr::new(-level, level)?)
        } else {
            None
        };

        Ok(Self { distribution })
    }
}

impl NoiseFn for Uniform {
    fn apply(&self, ys: ArrayView1<f32>, rng: &mut dyn RngCore) -> Array1<f32> {
        let Some(distribution) = &self.distribution else {
            return ys.to_owned();
        };

        ys.mapv(|y| y + distribution.sample(rng))
    }
}
