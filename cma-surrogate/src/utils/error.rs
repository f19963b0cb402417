#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.clone()).collect::<Vec<_>>().join(separator)
    }
}

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(value: serde_json::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<OptimizationError> for GenericError {
    fn from(value: OptimizationError) -> Self {
        Self(value.to_string())
    }
}

/// Errors which can happen while the optimization is running.
///
/// A disagreement between the classifier and the true feasibility oracle is not an error: it is
/// recorded in the confusion matrix of the generation.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationError {
    /// The covariance matrix lost positive definiteness, its eigendecomposition failed or the
    /// step size became degenerate. The run cannot continue.
    NumericalInstability(String),

    /// No feasible point was found within the allowed amount of sampling attempts.
    ResamplingExhausted {
        /// Amount of sampled points within the generation.
        attempts: usize,
    },

    /// A ratio metric cannot be computed because its denominator is zero.
    DegenerateRatio(&'static str),

    /// The ask/tell protocol was used incorrectly: calls out of order, missing evaluation data
    /// or dimension mismatch.
    ContractViolation(String),
}

/// A type alias for result type with `OptimizationError`.
pub type OptimizationResult<T> = Result<T, OptimizationError>;

impl std::fmt::Display for OptimizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizationError::NumericalInstability(reason) => write!(f, "numerical instability: {reason}"),
            OptimizationError::ResamplingExhausted { attempts } => {
                write!(f, "cannot sample enough feasible solutions after {attempts} attempts")
            }
            OptimizationError::DegenerateRatio(metric) => write!(f, "degenerate ratio: {metric} is undefined"),
            OptimizationError::ContractViolation(reason) => write!(f, "contract violation: {reason}"),
        }
    }
}

impl std::error::Error for OptimizationError {}
