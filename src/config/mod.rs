mod run;
mod sweep;

pub use run::{LossKind, NoiseKind, OptimizerKind, PatienceConfig, RunConfig};
pub use sweep::{DataConfig, SweepConfig};
