//! Scalar (1D) root finding for monotone functions.
//!
//! The searches here work on a monotone *predicate* rather than on a signed
//! function value: they locate the smallest argument at which the predicate
//! switches from `false` to `true`. This is the form quantile inversion needs,
//! because a CDF can be flat over whole intervals and a sign-change root is
//! then not unique.

mod root_finding;

pub use root_finding::{Bracket, bisect_monotone, bracket_monotone, search_integer};

/// Options for scalar root finding.
#[derive(Debug, Clone)]
pub struct ScalarOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Absolute tolerance for convergence (width of interval)
    pub tol: f64,
    /// Relative tolerance for convergence (width of interval)
    pub rtol: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-12,
            rtol: 1e-12,
        }
    }
}

impl ScalarOptions {
    /// Options used for quantile inversion.
    ///
    /// The relative tolerance is two ulps of the bracket end and the absolute
    /// tolerance is the smallest normal double, so quantiles far into either
    /// tail are resolved to full precision. `max_iter` covers bisection from
    /// `±f64::MAX` down to the absolute tolerance.
    pub fn quantile() -> Self {
        Self {
            max_iter: 2200,
            tol: f64::MIN_POSITIVE,
            rtol: 2.0 * f64::EPSILON,
        }
    }
}

/// Result from a root finding method.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// The root found
    pub root: f64,
    /// Number of iterations used
    pub iterations: usize,
    /// Final bracket width
    pub bracket_width: f64,
}
