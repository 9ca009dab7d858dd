use ndarray::{Array1, ArrayView1};
use rand::RngCore;
use rand_distr::{Distribution, Uniform};

use super::{check_level, NoiseFn};
use crate::{error::Result, loss};

/// Additive laplace noise, `y + Laplace(0, level)`.
///
/// Samples are drawn by inverting the laplace CDF over a uniform draw in `[-0.5, 0.5)`.
#[derive(Debug, Clone)]
pub struct Laplace {
    scale: f32,
    uniform: Uniform<f32>,
}

impl Laplace {
    /// Creates a new `Laplace` noise function.
    ///
    /// # Arguments
    /// * `level` - The scale `b` of the distribution.
    ///
    /// # Returns
    /// An error if `level` is negative or not finite.
    pub fn new(level: f32) -> Result<Self> {
        Ok(Self {
            scale: check_level(level)?,
            uniform: Uniform::new(-0.5, 0.5)?,
        })
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f32 {
        let u = self.uniform.sample(rng);
        let tail = (1. - 2. * u.abs()).max(f32::MIN_POSITIVE);
        -self.scale * loss::sign(u) * tail.ln()
    }
}

impl NoiseFn for Laplace {
    fn apply(&self, ys: ArrayView1<f32>, rng: &mut dyn RngCore) -> Array1<f32> {
        if self.scale == 0. {
            return ys.to_owned();
        }

        ys.mapv(|y| y + self.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn moments() {
        const N: usize = 20_000;
        let mut rng = StdRng::seed_from_u64(7);
        let ys = Array1::<f32>::zeros(N);

        let noisy = Laplace::new(1.).unwrap().apply(ys.view(), &mut rng);
        let mean = noisy.mean().unwrap();
        // E|X| = b
        let mean_abs = noisy.mapv(f32::abs).mean().unwrap();

        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((mean_abs - 1.).abs() < 0.05, "mean abs {mean_abs}");
        assert!(noisy.iter().all(|y| y.is_finite()));
    }

    #[test]
    fn rejects_nan_level() {
        assert!(Laplace::new(f32::NAN).is_err());
    }

    #[test]
    fn zero_level_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let ys = Array1::linspace(-2., 2., 9);

        let noisy = Laplace::new(0.).unwrap().apply(ys.view(), &mut rng);
        assert_eq!(noisy, ys);
    }

    #[test]
    fn empty_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let ys = Array1::<f32>::zeros(0);

        let noisy = Laplace::new(1.).unwrap().apply(ys.view(), &mut rng);
        assert!(noisy.is_empty());
    }
}
