use ndarray::{Array1, ArrayView1};
use rand::RngCore;

/// A transformation that corrupts a sequence of targets.
pub trait NoiseFn {
    /// Returns a corrupted copy of `ys`.
    ///
    /// # Arguments
    /// * `ys` - The clean sequence.
    /// * `rng` - The source of randomness.
    fn apply(&self, ys: ArrayView1<f32>, rng: &mut dyn RngCore) -> Array1<f32>;
}

impl<T: NoiseFn + ?Sized> NoiseFn for Box<T> {
    fn apply(&self, ys: ArrayView1<f32>, rng: &mut dyn RngCore) -> Array1<f32> {
        (**self).apply(ys, rng)
    }
}
