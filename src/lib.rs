//! Linear regression sweeps over loss functions, learning rates, noise kinds and learning rate
//! schedules.

pub mod config;
pub mod dataset;
pub mod error;
pub mod loss;
pub mod model;
pub mod noise;
pub mod optimization;
pub mod plot;
pub mod schedule;
pub mod summary;
pub mod sweep;
pub mod training;

pub use error::{Result, SweepErr};
