use super::Optimizer;
use crate::error::{Result, SweepErr};

pub const DEFAULT_BETA1: f32 = 0.9;
pub const DEFAULT_BETA2: f32 = 0.999;
pub const DEFAULT_EPSILON: f32 = 1e-7;

#[derive(Debug)]
pub struct Adam {
    learning_rate: f32,
    beta1: f32,
    beta2: f32,
    beta1_t: f32,
    beta2_t: f32,
    v: Box<[f32]>,
    s: Box<[f32]>,
    epsilon: f32,
}

impl Adam {
    /// Creates a new `Adam` optimizer.
    ///
    /// # Arguments
    /// * `len` - The amount of parameters this instance should hold.
    /// * `learning_rate` - The small coefficient that modulates the amount of training per update.
    /// * `beta1`, `beta2`, `epsilon` - Hyperparameters to the optimization algorithm.
    ///
    /// # Returns
    /// A new `Adam` instance.
    pub fn new(len: usize, learning_rate: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self {
            learning_rate,
            beta1,
            beta2,
            beta1_t: 1.,
            beta2_t: 1.,
            v: vec![0.; len].into_boxed_slice(),
            s: vec![0.; len].into_boxed_slice(),
            epsilon,
        }
    }

    /// Creates a new `Adam` optimizer with the usual hyperparameters.
    pub fn with_defaults(len: usize, learning_rate: f32) -> Self {
        Self::new(
            len,
            learning_rate,
            DEFAULT_BETA1,
            DEFAULT_BETA2,
            DEFAULT_EPSILON,
        )
    }
}

impl Optimizer for Adam {
    fn update_params(&mut self, grad: &[f32], params: &mut [f32]) -> Result<()> {
        if grad.len() != params.len() || params.len() != self.v.len() {
            return Err(SweepErr::SizeMismatch {
                a: "grad",
                b: "params",
                got: grad.len(),
                expected: self.v.len(),
            });
        }

        let Self {
            learning_rate: lr,
            beta1: b1,
            beta2: b2,
            epsilon: eps,
            ..
        } = *self;

        self.beta1_t *= b1;
        self.beta2_t *= b2;

        let bc1 = 1. - self.beta1_t;
        let bc2 = 1. - self.beta2_t;
        let step_size = lr * (bc2.sqrt() / bc1);

        params
            .iter_mut()
            .zip(grad)
            .zip(self.v.iter_mut())
            .zip(self.s.iter_mut())
            .for_each(|(((p, g), v), s)| {
                *v = b1 * *v + (1. - b1) * g;
                *s = b2 * *s + (1. - b2) * g.powi(2);
                *p -= step_size * *v / (s.sqrt() + eps);
            });

        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f32) {
        self.learning_rate = learning_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_has_learning_rate_length() {
        let mut adam = Adam::with_defaults(2, 0.1);
        let mut params = [0., 0.];

        adam.update_params(&[3., -0.5], &mut params).unwrap();

        // bias correction makes the first step +-lr regardless of the gradient's magnitude
        assert!((params[0] + 0.1).abs() < 1e-4);
        assert!((params[1] - 0.1).abs() < 1e-4);
    }

    #[test]
    fn decayed_rate_shrinks_steps() {
        let mut adam = Adam::with_defaults(1, 0.1);
        let mut params = [0.];

        adam.update_params(&[1.], &mut params).unwrap();
        let first = params[0];

        adam.set_learning_rate(0.01);
        adam.update_params(&[1.], &mut params).unwrap();
        let second = params[0] - first;

        assert_eq!(adam.learning_rate(), 0.01);
        assert!(second.abs() < first.abs() / 5.);
    }

    #[test]
    fn size_mismatch() {
        let mut adam = Adam::with_defaults(2, 0.1);
        let mut params = [0., 0., 0.];

        assert!(adam.update_params(&[1., 1., 1.], &mut params).is_err());
    }
}
