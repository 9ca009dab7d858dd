use crate::error::Result;

/// Defines the strategy for updating model parameters based on calculated gradients.
pub trait Optimizer {
    /// Updates the provided slice of parameters using the gradient.
    ///
    /// # Arguments
    /// * `grad` - A reference to the model's gradient.
    /// * `params` - The parameters to update.
    ///
    /// # Returns
    /// An error if there's a mismatch in the sizes of `grad` and `params`.
    fn update_params(&mut self, grad: &[f32], params: &mut [f32]) -> Result<()>;

    /// Returns the current learning rate.
    fn learning_rate(&self) -> f32;

    /// Replaces the learning rate used by the following updates.
    fn set_learning_rate(&mut self, learning_rate: f32);
}

impl<T: Optimizer + ?Sized> Optimizer for Box<T> {
    fn update_params(&mut self, grad: &[f32], params: &mut [f32]) -> Result<()> {
        (**self).update_params(grad, params)
    }

    fn learning_rate(&self) -> f32 {
        (**self).learning_rate()
    }

    fn set_learning_rate(&mut self, learning_rate: f32) {
        (**self).set_learning_rate(learning_rate)
    }
}
