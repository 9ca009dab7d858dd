use ndarray::{Array1, ArrayView1};

use crate::{
    error::{Result, SweepErr},
    loss::LossFn,
};

/// The amount of parameters of a `LinearModel`.
pub const PARAMS: usize = 2;

/// A line `y = slope * x + intercept`.
///
/// Parameters are stored as `[slope, intercept]` so optimizers can update them as a slice.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LinearModel {
    params: [f32; PARAMS],
}

impl LinearModel {
    /// Returns a new `LinearModel`.
    pub fn new(slope: f32, intercept: f32) -> Self {
        Self {
            params: [slope, intercept],
        }
    }

    pub fn slope(&self) -> f32 {
        self.params[0]
    }

    pub fn intercept(&self) -> f32 {
        self.params[1]
    }

    pub fn params(&self) -> &[f32] {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut [f32] {
        &mut self.params
    }

    /// Evaluates the line over every `x`.
    pub fn forward(&self, xs: ArrayView1<f32>) -> Array1<f32> {
        let [slope, intercept] = self.params;
        xs.mapv(|x| slope * x + intercept)
    }

    /// Computes the loss over the samples and its gradient with respect to the parameters.
    ///
    /// # Arguments
    /// * `xs` - The inputs.
    /// * `ys` - The targets.
    /// * `loss_fn` - The loss function.
    ///
    /// # Returns
    /// The loss and `[d loss / d slope, d loss / d intercept]`, or an error if `xs` and `ys`
    /// differ in length.
    pub fn gradient<L>(
        &self,
        xs: ArrayView1<f32>,
        ys: ArrayView1<f32>,
        loss_fn: &L,
    ) -> Result<(f32, [f32; PARAMS])>
    where
        L: LossFn + ?Sized,
    {
        if xs.len() != ys.len() {
            return Err(SweepErr::SizeMismatch {
                a: "xs",
                b: "ys",
                got: ys.len(),
                expected: xs.len(),
            });
        }

        let y_pred = self.forward(xs);
        let loss = loss_fn.loss(y_pred.view(), ys);
        let delta = loss_fn.loss_prime(y_pred.view(), ys);

        Ok((loss, [delta.dot(&xs), delta.sum()]))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::loss::{Huber, Mse};

    #[test]
    fn forward() {
        let model = LinearModel::new(2., 1.);
        let xs = array![-1., 0., 3.];

        assert_eq!(model.forward(xs.view()), array![-1f32, 1., 7.]);
    }

    #[test]
    fn size_mismatch() {
        let model = LinearModel::default();
        let xs = array![1., 2.];
        let ys = array![1.];

        assert!(model.gradient(xs.view(), ys.view(), &Mse).is_err());
    }

    #[test]
    fn gradient_matches_finite_differences() {
        const H: f32 = 1e-3;

        let xs = Array1::linspace(-2., 2., 9);
        let ys = xs.mapv(|x| 0.5 * x - 1.);
        let loss_fn = Huber::new(1.).unwrap();
        let model = LinearModel::new(1.2, 0.3);

        let (_, grad) = model.gradient(xs.view(), ys.view(), &loss_fn).unwrap();

        for (i, g) in grad.iter().enumerate() {
            let mut plus = model;
            let mut minus = model;
            plus.params_mut()[i] += H;
            minus.params_mut()[i] -= H;

            let l_plus = loss_fn.loss(plus.forward(xs.view()).view(), ys.view());
            let l_minus = loss_fn.loss(minus.forward(xs.view()).view(), ys.view());
            let numeric = (l_plus - l_minus) / (2. * H);

            assert!((numeric - g).abs() < 1e-2, "param {i}: {numeric} vs {g}");
        }
    }
}
