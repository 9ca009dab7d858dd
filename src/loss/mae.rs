use ndarray::{Array1, ArrayView1};

use super::{sign, LossFn};

/// Mean absolute error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mae;

impl Mae {
    /// Returns a new `Mae`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mae {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        (&y_pred - &y).mapv(f32::abs).mean().unwrap_or_default()
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        let n = y_pred.len() as f32;
        (&y_pred - &y).mapv(|r| sign(r) / n)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn loss_is_mean_of_abs() {
        let y_pred = array![1., 2., 3., 4.];
        let y = array![2., 2., 0., 4.];

        assert_eq!(Mae.loss(y_pred.view(), y.view()), 1.);
    }

    #[test]
    fn subgradient_is_zero_on_exact_fit() {
        let y_pred = array![1., 2., 3., 4.];
        let y = array![2., 2., 0., 4.];

        let grad = Mae.loss_prime(y_pred.view(), y.view());
        assert_eq!(grad, array![-0.25f32, 0., 0.25, 0.]);
    }

    #[test]
    fn empty_inputs() {
        let empty = Array1::<f32>::zeros(0);

        assert_eq!(Mae.loss(empty.view(), empty.view()), 0.);
        assert!(Mae.loss_prime(empty.view(), empty.view()).is_empty());
    }
}
