use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use super::{LossKind, NoiseKind, OptimizerKind, PatienceConfig, RunConfig};
use crate::{
    dataset::Dataset,
    error::{Result, SweepErr},
};

const DEFAULT_SAMPLES: usize = 100;
const DEFAULT_STEPS: usize = 500;
const DEFAULT_NOISE_LEVEL: f32 = 1.;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_LEARNING_RATES: [f32; 2] = [0.01, 0.1];

/// The line every run of a sweep is fitted to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub samples: usize,
    pub x_min: f32,
    pub x_max: f32,
    pub slope: f32,
    pub intercept: f32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            x_min: -5.,
            x_max: 5.,
            slope: 2.,
            intercept: 1.,
        }
    }
}

impl DataConfig {
    /// Builds the clean dataset described by this config.
    pub fn build(&self) -> Result<Dataset> {
        Dataset::linear(
            self.samples,
            (self.x_min, self.x_max),
            self.slope,
            self.intercept,
        )
    }
}

/// The full description of a sweep: the data and the ordered list of runs over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub data: DataConfig,
    pub runs: Vec<RunConfig>,
}

impl Default for SweepConfig {
    /// Every loss against every noise kind, both learning rates, with and without patience.
    fn default() -> Self {
        let losses = [
            LossKind::Mse,
            LossKind::Mae,
            LossKind::Huber { delta: 1. },
            LossKind::Blend { alpha: 0.5 },
        ];
        let noises = [
            NoiseKind::Gaussian,
            NoiseKind::Uniform,
            NoiseKind::salt_pepper(),
            NoiseKind::Laplace,
        ];
        let patiences = [None, Some(PatienceConfig::default())];

        let mut runs = Vec::with_capacity(losses.len() * noises.len() * 2 * patiences.len());
        for loss in losses {
            for noise in noises {
                for learning_rate in DEFAULT_LEARNING_RATES {
                    for patience in patiences {
                        runs.push(RunConfig {
                            name: RunConfig::label(loss, noise, learning_rate, patience.as_ref()),
                            loss,
                            noise,
                            noise_level: DEFAULT_NOISE_LEVEL,
                            optimizer: OptimizerKind::default(),
                            learning_rate,
                            steps: DEFAULT_STEPS,
                            patience,
                            seed: Some(DEFAULT_SEED),
                        });
                    }
                }
            }
        }

        Self {
            data: DataConfig::default(),
            runs,
        }
    }
}

impl SweepConfig {
    /// Loads a sweep from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the whole sweep before any run starts.
    pub fn validate(&self) -> Result<()> {
        self.validate_data()?;

        if self.runs.is_empty() {
            return Err(SweepErr::InvalidConfig(
                "sweep must have at least one run".into(),
            ));
        }

        let mut names = HashSet::with_capacity(self.runs.len());
        for run in &self.runs {
            if !names.insert(run.name.as_str()) {
                return Err(SweepErr::InvalidConfig(format!(
                    "duplicate run name: {}",
                    run.name
                )));
            }

            self.validate_run(run)?;
        }

        Ok(())
    }

    fn validate_data(&self) -> Result<()> {
        let data = &self.data;

        if data.samples == 0 {
            return Err(SweepErr::InvalidConfig(
                "dataset must have at least one sample".into(),
            ));
        }

        if !data.x_min.is_finite() || !data.x_max.is_finite() || data.x_min > data.x_max {
            return Err(SweepErr::InvalidConfig(format!(
                "invalid input range [{}, {}]",
                data.x_min, data.x_max
            )));
        }

        if !data.slope.is_finite() || !data.intercept.is_finite() {
            return Err(SweepErr::InvalidConfig(
                "slope and intercept must be finite".into(),
            ));
        }

        Ok(())
    }

    fn validate_run(&self, run: &RunConfig) -> Result<()> {
        let invalid = |msg: String| Err(SweepErr::InvalidConfig(format!("{}: {msg}", run.name)));

        if run.steps == 0 {
            return invalid("steps must be greater than 0".into());
        }

        if !run.learning_rate.is_finite() || run.learning_rate <= 0. {
            return invalid(format!(
                "learning rate must be positive, got {}",
                run.learning_rate
            ));
        }

        if !run.noise_level.is_finite() || run.noise_level < 0. {
            return invalid(format!(
                "noise level must be non negative, got {}",
                run.noise_level
            ));
        }

        match run.loss {
            LossKind::Huber { delta } if !delta.is_finite() || delta <= 0. => {
                return invalid(format!("huber delta must be positive, got {delta}"));
            }
            LossKind::Blend { alpha } if !(0. ..=1.).contains(&alpha) => {
                return invalid(format!("blend alpha must be in [0, 1], got {alpha}"));
            }
            _ => {}
        }

        if let NoiseKind::SaltPepper { scale } = run.noise {
            if !scale.is_finite() || scale < 0. {
                return invalid(format!("salt and pepper scale must be non negative, got {scale}"));
            }
        }

        if let Some(patience) = &run.patience {
            if patience.patience == 0 {
                return invalid("patience must be greater than 0".into());
            }
            if !(patience.factor > 0. && patience.factor < 1.) {
                return invalid(format!(
                    "decay factor must be in (0, 1), got {}",
                    patience.factor
                ));
            }
            if !patience.min_lr.is_finite() || patience.min_lr < 0. {
                return invalid(format!(
                    "min learning rate must be non negative, got {}",
                    patience.min_lr
                ));
            }
            if !patience.min_delta.is_finite() || patience.min_delta < 0. {
                return invalid(format!(
                    "min delta must be non negative, got {}",
                    patience.min_delta
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_covers_the_grid() {
        let config = SweepConfig::default();

        assert_eq!(config.runs.len(), 64);
        assert!(config.validate().is_ok());

        let with_patience = config.runs.iter().filter(|r| r.patience.is_some()).count();
        assert_eq!(with_patience, 32);

        let huber_laplace = config
            .runs
            .iter()
            .filter(|r| r.loss == LossKind::Huber { delta: 1. } && r.noise == NoiseKind::Laplace)
            .count();
        assert_eq!(huber_laplace, 4);
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut config = SweepConfig::default();
        let first = config.runs[0].clone();
        config.runs.push(first);

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_invalid_runs() {
        let base = SweepConfig::default();

        let mut config = base.clone();
        config.runs[0].steps = 0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.runs[0].learning_rate = -0.1;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.runs[0].loss = LossKind::Blend { alpha: 2. };
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.runs[1].patience = Some(PatienceConfig {
            factor: 1.5,
            ..PatienceConfig::default()
        });
        assert!(config.validate().is_err());

        let mut config = base;
        config.runs.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_invalid_data() {
        let mut config = SweepConfig::default();
        config.data.samples = 0;
        assert!(config.validate().is_err());

        let mut config = SweepConfig::default();
        config.data.x_min = 10.;
        assert!(config.validate().is_err());
    }
}
