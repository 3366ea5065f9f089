//! Error types for distribution operations.

use std::fmt;

use crate::optimize::OptimizeError;

/// Result type for distribution operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur when constructing or querying a distribution.
#[derive(Debug, Clone)]
pub enum StatsError {
    /// Invalid parameter value for a distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Probability value out of range [0, 1].
    InvalidProbability { value: f64 },

    /// Iterative method did not converge.
    ConvergenceError { iterations: usize, context: String },
}

impl StatsError {
    pub(crate) fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::InvalidProbability { value } => {
                write!(f, "Invalid probability {}: must be in [0, 1]", value)
            }
            Self::ConvergenceError {
                iterations,
                context,
            } => {
                write!(
                    f,
                    "{} did not converge after {} iterations",
                    context, iterations
                )
            }
        }
    }
}

impl std::error::Error for StatsError {}

impl From<OptimizeError> for StatsError {
    fn from(err: OptimizeError) -> Self {
        match err {
            OptimizeError::DidNotConverge {
                iterations,
                context,
                ..
            } => Self::ConvergenceError {
                iterations,
                context,
            },
            OptimizeError::InvalidInterval { a, b, context } => Self::InvalidParameter {
                name: "support".to_string(),
                value: a,
                reason: format!("{context}: lower bound exceeds upper bound {b}"),
            },
        }
    }
}

/// Check that `p` is a probability, rejecting NaN.
pub(crate) fn check_probability(p: f64) -> StatsResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(StatsError::InvalidProbability { value: p })
    }
}
