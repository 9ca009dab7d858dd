//! Noise injection over target sequences.
//!
//! Every noise function leaves its input untouched and returns a corrupted copy. A noise level
//! of `0` returns an exact copy for every kind.

mod gaussian;
mod laplace;
mod noise_fn;
mod salt_pepper;
mod uniform;

pub use gaussian::Gaussian;
pub use laplace::Laplace;
pub use noise_fn::NoiseFn;
pub use salt_pepper::{SaltPepper, DEFAULT_SCALE as SALT_PEPPER_SCALE};
pub use uniform::Uniform;

use crate::error::{Result, SweepErr};

/// Checks that a noise level is finite and non negative.
fn check_level(level: f32) -> Result<f32> {
    if !level.is_finite() || level < 0. {
        return Err(SweepErr::InvalidParam {
            what: "noise level",
            value: level,
        });
    }

    Ok(level)
}
