//! Error types for root finding.

use std::fmt;

/// Result type for root finding operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur while searching for a root.
#[derive(Debug, Clone)]
pub enum OptimizeError {
    /// The solver did not converge within the maximum iterations.
    DidNotConverge {
        iterations: usize,
        tolerance: f64,
        context: String,
    },

    /// Invalid interval provided to a bracketing method.
    InvalidInterval { a: f64, b: f64, context: String },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DidNotConverge {
                iterations,
                tolerance,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} iterations (tolerance: {})",
                    context, iterations, tolerance
                )
            }
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must satisfy a <= b",
                    a, b, context
                )
            }
        }
    }
}

impl std::error::Error for OptimizeError {}
