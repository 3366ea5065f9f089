//! Root finding used by quantile inversion.
//!
//! # Modules
//!
//! - [`scalar`] - Univariate bracketing and bisection for monotone predicates
//!
//! # Quick Start
//!
//! ```
//! use probdist::optimize::scalar::{bisect_monotone, bracket_monotone, ScalarOptions};
//!
//! // Smallest x >= 0 with x^3 >= 10
//! let pred = |x: f64| x * x * x >= 10.0;
//! let b = bracket_monotone(pred, 0.0, f64::INFINITY, 1.0).unwrap();
//! let r = bisect_monotone(pred, b.lo, b.hi, &ScalarOptions::quantile()).unwrap();
//! assert!((r.root - 10f64.cbrt()).abs() < 1e-14);
//! ```

pub mod error;
pub mod scalar;

pub use error::{OptimizeError, OptimizeResult};
