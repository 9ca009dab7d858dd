use ndarray::{Array1, ArrayView1};
use rand::RngCore;

use crate::{
    error::{Result, SweepErr},
    noise::NoiseFn,
};

/// Samples of a line, with the targets used for training and the clean ones they came from.
#[derive(Debug, Clone)]
pub struct Dataset {
    xs: Array1<f32>,
    ys: Array1<f32>,
    clean: Array1<f32>,
}

impl Dataset {
    /// Creates a noiseless dataset over the line `slope * x + intercept`.
    ///
    /// # Arguments
    /// * `n` - The amount of samples.
    /// * `(low, high)` - The inclusive range the inputs are evenly spaced over.
    /// * `slope`, `intercept` - The line's parameters.
    ///
    /// # Returns
    /// An error if `n` is zero or the range is not finite.
    pub fn linear(n: usize, (low, high): (f32, f32), slope: f32, intercept: f32) -> Result<Self> {
        if n == 0 {
            return Err(SweepErr::InvalidConfig(
                "dataset must have at least one sample".into(),
            ));
        }

        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(SweepErr::InvalidConfig(format!(
                "invalid input range [{low}, {high}]"
            )));
        }

        let xs = Array1::linspace(low, high, n);
        let clean = xs.mapv(|x| slope * x + intercept);

        Ok(Self {
            ys: clean.clone(),
            xs,
            clean,
        })
    }

    /// Returns a copy of this dataset with its clean targets corrupted by `noise`.
    pub fn with_noise<N>(&self, noise: &N, rng: &mut dyn RngCore) -> Self
    where
        N: NoiseFn + ?Sized,
    {
        Self {
            xs: self.xs.clone(),
            ys: noise.apply(self.clean.view(), rng),
            clean: self.clean.clone(),
        }
    }

    pub fn xs(&self) -> ArrayView1<'_, f32> {
        self.xs.view()
    }

    /// The training targets.
    pub fn ys(&self) -> ArrayView1<'_, f32> {
        self.ys.view()
    }

    /// The targets before any noise was applied.
    pub fn clean(&self) -> ArrayView1<'_, f32> {
        self.clean.view()
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::noise::Gaussian;

    #[test]
    fn evenly_spaced_line() {
        let dataset = Dataset::linear(5, (-2., 2.), 3., 1.).unwrap();

        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.xs().to_vec(), vec![-2., -1., 0., 1., 2.]);
        assert_eq!(dataset.ys().to_vec(), vec![-5., -2., 1., 4., 7.]);
        assert_eq!(dataset.ys(), dataset.clean());
    }

    #[test]
    fn rejects_empty() {
        assert!(Dataset::linear(0, (0., 1.), 1., 0.).is_err());
        assert!(Dataset::linear(3, (1., 0.), 1., 0.).is_err());
    }

    #[test]
    fn noise_keeps_clean_targets() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = Dataset::linear(20, (0., 1.), 1., 0.).unwrap();

        let noisy = dataset.with_noise(&Gaussian::new(1.).unwrap(), &mut rng);

        assert_eq!(noisy.clean(), dataset.clean());
        assert_eq!(noisy.xs(), dataset.xs());
        assert_ne!(noisy.ys(), dataset.ys());
    }
}
