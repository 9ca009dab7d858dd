use ndarray::{Array1, ArrayView1};

/// A loss function over equal-length prediction and target sequences.
///
/// Lengths are not checked here: a length-1 `y` broadcasts against `y_pred` and other mismatches
/// panic. Callers owning the data check them first, as `LinearModel::gradient` does.
pub trait LossFn {
    /// Returns the mean loss, `0` for empty inputs.
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32;

    /// Returns the derivative of the mean loss with respect to each prediction.
    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32>;
}

impl<T: LossFn + ?Sized> LossFn for Box<T> {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        (**self).loss(y_pred, y)
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        (**self).loss_prime(y_pred, y)
    }
}
