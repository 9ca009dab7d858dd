use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use rand_distr::{uniform::Error as UniformError, BernoulliError, NormalError};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, SweepErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum SweepErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidParam {
        what: &'static str,
        value: f32,
    },
    InvalidConfig(String),
    Distribution(String),
    Plot(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for SweepErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            SweepErr::InvalidParam { what, value } => {
                write!(f, "invalid value for {what}: {value}")
            }
            SweepErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            SweepErr::Distribution(msg) => write!(f, "invalid distribution: {msg}"),
            SweepErr::Plot(msg) => write!(f, "plotting failed: {msg}"),
            SweepErr::Io(e) => write!(f, "io error: {e}"),
            SweepErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for SweepErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SweepErr::Io(e) => Some(e),
            SweepErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SweepErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SweepErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<NormalError> for SweepErr {
    fn from(value: NormalError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<UniformError> for SweepErr {
    fn from(value: UniformError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<BernoulliError> for SweepErr {
    fn from(value: BernoulliError) -> Self {
        Self::Distribution(value.to_string())
    }
}
