use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{
    noise::SALT_PEPPER_SCALE,
    optimization::{DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPSILON},
    schedule,
};

/// The loss function a run minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossKind {
    Mse,
    Mae,
    Huber { delta: f32 },
    Blend { alpha: f32 },
}

impl Display for LossKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossKind::Mse => write!(f, "mse"),
            LossKind::Mae => write!(f, "mae"),
            LossKind::Huber { delta } => write!(f, "huber({delta})"),
            LossKind::Blend { alpha } => write!(f, "blend({alpha})"),
        }
    }
}

/// The noise injected into a run's targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    Gaussian,
    Uniform,
    SaltPepper {
        #[serde(default = "default_salt_pepper_scale")]
        scale: f32,
    },
    Laplace,
}

impl NoiseKind {
    /// Salt and pepper noise with the default probability scale.
    pub fn salt_pepper() -> Self {
        NoiseKind::SaltPepper {
            scale: SALT_PEPPER_SCALE,
        }
    }
}

impl Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseKind::Gaussian => write!(f, "gaussian"),
            NoiseKind::Uniform => write!(f, "uniform"),
            NoiseKind::SaltPepper { .. } => write!(f, "salt_pepper"),
            NoiseKind::Laplace => write!(f, "laplace"),
        }
    }
}

fn default_salt_pepper_scale() -> f32 {
    SALT_PEPPER_SCALE
}

/// The optimization algorithm of a run, the learning rate lives in `RunConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    Adam {
        #[serde(default = "default_beta1")]
        beta1: f32,
        #[serde(default = "default_beta2")]
        beta2: f32,
        #[serde(default = "default_epsilon")]
        epsilon: f32,
    },
    GradientDescent,
}

impl Default for OptimizerKind {
    fn default() -> Self {
        OptimizerKind::Adam {
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

fn default_beta1() -> f32 {
    DEFAULT_BETA1
}

fn default_beta2() -> f32 {
    DEFAULT_BETA2
}

fn default_epsilon() -> f32 {
    DEFAULT_EPSILON
}

/// Parameters of the patience based learning rate decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatienceConfig {
    pub patience: usize,
    pub factor: f32,
    pub min_lr: f32,
    pub min_delta: f32,
}

impl Default for PatienceConfig {
    fn default() -> Self {
        Self {
            patience: schedule::DEFAULT_PATIENCE,
            factor: schedule::DEFAULT_FACTOR,
            min_lr: schedule::DEFAULT_MIN_LR,
            min_delta: 0.,
        }
    }
}

/// A single training run of the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub loss: LossKind,
    pub noise: NoiseKind,
    pub noise_level: f32,
    #[serde(default)]
    pub optimizer: OptimizerKind,
    pub learning_rate: f32,
    pub steps: usize,
    #[serde(default)]
    pub patience: Option<PatienceConfig>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Builds the name a run gets in the default sweep, e.g. `huber(1)/laplace/lr=0.1/patience`.
    pub fn label(
        loss: LossKind,
        noise: NoiseKind,
        learning_rate: f32,
        patience: Option<&PatienceConfig>,
    ) -> String {
        let schedule = if patience.is_some() {
            "patience"
        } else {
            "constant"
        };

        format!("{loss}/{noise}/lr={learning_rate}/{schedule}")
    }
}
