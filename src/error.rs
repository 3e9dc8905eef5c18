use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, EsrlErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum EsrlErr {
    /// A buffer doesn't hold the amount of elements it should.
    LengthMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// Two models don't have the same amount of parameters.
    ParamCountMismatch { got: usize, expected: usize },
    /// The `index`-th parameter of two models doesn't have the same shape.
    ShapeMismatch {
        index: usize,
        got: Vec<usize>,
        expected: Vec<usize>,
    },
    InvalidShape(Vec<usize>),
    InvalidTau(f64),
    InvalidConfig(String),
    Init(String),
    /// A run folder already carries the highest possible run id.
    RunIdsExhausted(PathBuf),
    Io(io::Error),
    Json(serde_json::Error),
}

impl EsrlErr {
    /// Whether this error denotes two models with a different parameter structure.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            EsrlErr::ParamCountMismatch { .. } | EsrlErr::ShapeMismatch { .. }
        )
    }
}

impl Display for EsrlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EsrlErr::LengthMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "length mismatch for {what}: got {got} elements, expected {expected}"
            ),
            EsrlErr::ParamCountMismatch { got, expected } => write!(
                f,
                "shape mismatch: the models have {got} and {expected} parameters"
            ),
            EsrlErr::ShapeMismatch {
                index,
                got,
                expected,
            } => write!(
                f,
                "shape mismatch at parameter {index}: got {got:?}, expected {expected:?}"
            ),
            EsrlErr::InvalidShape(shape) => {
                write!(f, "invalid parameter shape {shape:?}, dimensions must be positive")
            }
            EsrlErr::InvalidTau(tau) => write!(f, "tau must lie within [0, 1], got {tau}"),
            EsrlErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            EsrlErr::Init(msg) => write!(f, "initialization error: {msg}"),
            EsrlErr::RunIdsExhausted(dir) => {
                write!(f, "no run id left for a new folder in {}", dir.display())
            }
            EsrlErr::Io(e) => write!(f, "io error: {e}"),
            EsrlErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for EsrlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EsrlErr::Io(e) => Some(e),
            EsrlErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EsrlErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for EsrlErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<NormalError> for EsrlErr {
    fn from(value: NormalError) -> Self {
        Self::Init(value.to_string())
    }
}

impl From<UniformError> for EsrlErr {
    fn from(value: UniformError) -> Self {
        Self::Init(value.to_string())
    }
}
