use ndarray::{Array1, ArrayView1};
use rand::{Rng, RngCore};
use rand_distr::{Bernoulli, Distribution};

use super::{check_level, NoiseFn};
use crate::error::Result;

/// The default factor turning a noise level into a replacement probability.
pub const DEFAULT_SCALE: f32 = 0.1;

/// Salt and pepper noise.
///
/// Each element is replaced with probability `clamp(level * scale, 0, 1)` by the maximum
/// ("salt") or the minimum ("pepper") of the clean sequence, with even odds.
#[derive(Debug, Clone)]
pub struct SaltPepper {
    replace: Bernoulli,
}

impl SaltPepper {
    /// Creates a new `SaltPepper` noise function.
    ///
    /// # Arguments
    /// * `level` - The noise level.
    /// * `scale` - The factor turning `level` into a replacement probability.
    ///
    /// # Returns
    /// An error if `level` or `scale` are negative or not finite.
    pub fn new(level: f32, scale: f32) -> Result<Self> {
        let level = check_level(level)?;
        let scale = check_level(scale)?;
        let p = (level * scale).clamp(0., 1.);

        Ok(Self {
            replace: Bernoulli::new(p as f64)?,
        })
    }
}

impl NoiseFn for SaltPepper {
    fn apply(&self, ys: ArrayView1<f32>, rng: &mut dyn RngCore) -> Array1<f32> {
        let salt = ys.fold(f32::NEG_INFINITY, |acc, &y| acc.max(y));
        let pepper = ys.fold(f32::INFINITY, |acc, &y| acc.min(y));

        ys.mapv(|y| {
            if !self.replace.sample(rng) {
                y
            } else if rng.random_bool(0.5) {
                salt
            } else {
                pepper
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn saturated_probability_replaces_everything() {
        let mut rng = StdRng::seed_from_u64(42);
        let ys = Array1::from_iter((0..50).map(|i| (i % 5) as f32 - 2.));

        let noisy = SaltPepper::new(10., DEFAULT_SCALE).unwrap().apply(ys.view(), &mut rng);
        assert!(noisy.iter().all(|&y| y == 2. || y == -2.));
        assert!(noisy.iter().any(|&y| y == 2.));
        assert!(noisy.iter().any(|&y| y == -2.));
    }

    #[test]
    fn zero_level_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let ys = Array1::linspace(-2., 2., 50);

        let noisy = SaltPepper::new(0., DEFAULT_SCALE).unwrap().apply(ys.view(), &mut rng);
        assert_eq!(noisy, ys);
    }

    #[test]
    fn replaces_about_the_expected_share() {
        let mut rng = StdRng::seed_from_u64(3);
        let ys = Array1::linspace(0., 1., 10_000);

        // p = 0.2
        let noisy = SaltPepper::new(2., DEFAULT_SCALE).unwrap().apply(ys.view(), &mut rng);
        let replaced = noisy
            .iter()
            .zip(&ys)
            .filter(|(noisy, clean)| noisy != clean)
            .count();

        let share = replaced as f32 / ys.len() as f32;
        assert!((share - 0.2).abs() < 0.03, "share {share}");
    }

    #[test]
    fn empty_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let ys = Array1::<f32>::zeros(0);

        let noisy = SaltPepper::new(1., DEFAULT_SCALE).unwrap().apply(ys.view(), &mut rng);
        assert!(noisy.is_empty());
    }
}
