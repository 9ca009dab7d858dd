mod blend;
mod huber;
mod loss_fn;
mod mae;
mod mse;

pub use blend::Blend;
pub use huber::Huber;
pub use loss_fn::LossFn;
pub use mae::Mae;
pub use mse::Mse;

/// The sign of a residual, with `sign(0) = 0` so a perfect fit has a null subgradient.
pub(crate) fn sign(r: f32) -> f32 {
    if r > 0. {
        1.
    } else if r < 0. {
        -1.
    } else {
        0.
    }
}
