use std::num::NonZeroUsize;

use rand::{rngs::StdRng, SeedableRng};

use super::{LinearTrainer, Trainer};
use crate::{
    config::{LossKind, NoiseKind, OptimizerKind, RunConfig},
    dataset::Dataset,
    error::{Result, SweepErr},
    loss::{Blend, Huber, LossFn, Mae, Mse},
    model::{LinearModel, PARAMS},
    noise::{Gaussian, Laplace, NoiseFn, SaltPepper, Uniform},
    optimization::{Adam, GradientDescent, Optimizer},
    schedule::Patience,
};

/// Builds `Trainer`s given a run configuration, all of them over the same clean dataset.
pub struct TrainerBuilder {
    dataset: Dataset,
}

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    ///
    /// # Arguments
    /// * `dataset` - The clean dataset every run corrupts with its own noise.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Builds a new `Trainer` following a run configuration.
    ///
    /// # Arguments
    /// * `run` - The configuration of the run.
    pub fn build(&self, run: &RunConfig) -> Result<Box<dyn Trainer>> {
        self.resolve_optimizer(run)
    }

    fn resolve_optimizer(&self, run: &RunConfig) -> Result<Box<dyn Trainer>> {
        let lr = run.learning_rate;

        match run.optimizer {
            OptimizerKind::Adam {
                beta1,
                beta2,
                epsilon,
            } => {
                let optimizer = Adam::new(PARAMS, lr, beta1, beta2, epsilon);
                self.resolve_loss(run, optimizer)
            }
            OptimizerKind::GradientDescent => {
                let optimizer = GradientDescent::new(lr);
                self.resolve_loss(run, optimizer)
            }
        }
    }

    fn resolve_loss<O>(&self, run: &RunConfig, optimizer: O) -> Result<Box<dyn Trainer>>
    where
        O: Optimizer + 'static,
    {
        match run.loss {
            LossKind::Mse => self.terminate_build(run, optimizer, Mse::new()),
            LossKind::Mae => self.terminate_build(run, optimizer, Mae::new()),
            LossKind::Huber { delta } => self.terminate_build(run, optimizer, Huber::new(delta)?),
            LossKind::Blend { alpha } => self.terminate_build(run, optimizer, Blend::new(alpha)?),
        }
    }

    fn resolve_noise(&self, run: &RunConfig) -> Result<Box<dyn NoiseFn>> {
        let level = run.noise_level;

        let noise: Box<dyn NoiseFn> = match run.noise {
            NoiseKind::Gaussian => Box::new(Gaussian::new(level)?),
            NoiseKind::Uniform => Box::new(Uniform::new(level)?),
            NoiseKind::SaltPepper { scale } => Box::new(SaltPepper::new(level, scale)?),
            NoiseKind::Laplace => Box::new(Laplace::new(level)?),
        };

        Ok(noise)
    }

    fn resolve_schedule(&self, run: &RunConfig) -> Result<Option<Patience>> {
        let Some(config) = &run.patience else {
            return Ok(None);
        };

        let schedule = Patience::new(config.patience, config.factor, config.min_lr)?
            .with_min_delta(config.min_delta)?;

        Ok(Some(schedule))
    }

    fn terminate_build<O, L>(
        &self,
        run: &RunConfig,
        optimizer: O,
        loss_fn: L,
    ) -> Result<Box<dyn Trainer>>
    where
        O: Optimizer + 'static,
        L: LossFn + 'static,
    {
        let steps = NonZeroUsize::new(run.steps).ok_or_else(|| {
            SweepErr::InvalidConfig(format!("{}: steps must be greater than 0", run.name))
        })?;

        let mut rng = self.generate_rng(run.seed);
        let noise = self.resolve_noise(run)?;
        let dataset = self.dataset.with_noise(noise.as_ref(), &mut rng);
        let schedule = self.resolve_schedule(run)?;

        let trainer = LinearTrainer::new(
            run.name.clone(),
            LinearModel::default(),
            optimizer,
            loss_fn,
            schedule,
            dataset,
            steps,
        );

        Ok(Box::new(trainer))
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PatienceConfig, SweepConfig};

    fn run() -> RunConfig {
        RunConfig {
            name: "run".into(),
            loss: LossKind::Huber { delta: 1. },
            noise: NoiseKind::Gaussian,
            noise_level: 0.5,
            optimizer: OptimizerKind::default(),
            learning_rate: 0.1,
            steps: 300,
            patience: Some(PatienceConfig::default()),
            seed: Some(7),
        }
    }

    fn builder() -> TrainerBuilder {
        TrainerBuilder::new(SweepConfig::default().data.build().unwrap())
    }

    #[test]
    fn same_seed_same_report() {
        let builder = builder();

        let a = builder.build(&run()).unwrap().train().unwrap();
        let b = builder.build(&run()).unwrap().train().unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn every_kind_builds() {
        let builder = builder();
        let losses = [
            LossKind::Mse,
            LossKind::Mae,
            LossKind::Huber { delta: 2. },
            LossKind::Blend { alpha: 0.3 },
        ];
        let noises = [
            NoiseKind::Gaussian,
            NoiseKind::Uniform,
            NoiseKind::salt_pepper(),
            NoiseKind::Laplace,
        ];

        for loss in losses {
            for noise in noises {
                let config = RunConfig {
                    loss,
                    noise,
                    steps: 5,
                    optimizer: OptimizerKind::GradientDescent,
                    ..run()
                };

                let report = builder.build(&config).unwrap().train().unwrap();
                assert_eq!(report.losses.len(), 5);
            }
        }
    }

    #[test]
    fn invalid_parameters_fail_to_build() {
        let builder = builder();

        let bad_loss = RunConfig {
            loss: LossKind::Huber { delta: -1. },
            ..run()
        };
        assert!(builder.build(&bad_loss).is_err());

        let bad_noise = RunConfig {
            noise_level: -1.,
            ..run()
        };
        assert!(builder.build(&bad_noise).is_err());

        let no_steps = RunConfig { steps: 0, ..run() };
        assert!(builder.build(&no_steps).is_err());
    }
}
