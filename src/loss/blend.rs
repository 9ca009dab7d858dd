use ndarray::{Array1, ArrayView1};

use super::{LossFn, Mae, Mse};
use crate::error::{Result, SweepErr};

/// A convex combination of absolute and squared error, `alpha * mae + (1 - alpha) * mse`.
#[derive(Debug, Clone, Copy)]
pub struct Blend {
    alpha: f32,
    mae: Mae,
    mse: Mse,
}

impl Blend {
    /// Returns a new `Blend`.
    ///
    /// # Arguments
    /// * `alpha` - The weight of the absolute error term, in `[0, 1]`.
    ///
    /// # Returns
    /// An error if `alpha` is outside `[0, 1]`.
    pub fn new(alpha: f32) -> Result<Self> {
        if !(0. ..=1.).contains(&alpha) {
            return Err(SweepErr::InvalidParam {
                what: "blend alpha",
                value: alpha,
            });
        }

        Ok(Self {
            alpha,
            mae: Mae,
            mse: Mse,
        })
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl LossFn for Blend {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
        let a = self.alpha;
        a * self.mae.loss(y_pred, y) + (1. - a) * self.mse.loss(y_pred, y)
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Array1<f32> {
        let a = self.alpha;
        self.mae.loss_prime(y_pred, y) * a + self.mse.loss_prime(y_pred, y) * (1. - a)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn rejects_alpha_out_of_range() {
        assert!(Blend::new(-0.1).is_err());
        assert!(Blend::new(1.1).is_err());
        assert!(Blend::new(f32::NAN).is_err());
    }

    #[test]
    fn endpoints_match_pure_losses() {
        let y_pred = array![1., -2., 0.5];
        let y = array![0., 1., 0.5];

        let as_mae = Blend::new(1.).unwrap();
        let as_mse = Blend::new(0.).unwrap();

        assert_eq!(as_mae.loss(y_pred.view(), y.view()), Mae.loss(y_pred.view(), y.view()));
        assert_eq!(as_mse.loss(y_pred.view(), y.view()), Mse.loss(y_pred.view(), y.view()));
    }

    #[test]
    fn halfway_mix() {
        let blend = Blend::new(0.5).unwrap();
        let y_pred = array![2.];
        let y = array![0.];

        // 0.5 * 2 + 0.5 * 4
        assert_eq!(blend.loss(y_pred.view(), y.view()), 3.);
        // 0.5 * 1 + 0.5 * 4
        assert_eq!(blend.loss_prime(y_pred.view(), y.view()), array![2.5f32]);
    }

    #[test]
    fn empty_inputs() {
        let empty = Array1::<f32>::zeros(0);

        assert_eq!(Blend::new(0.5).unwrap().loss(empty.view(), empty.view()), 0.);
        assert!(Blend::new(0.5).unwrap().loss_prime(empty.view(), empty.view()).is_empty());
    }
}
