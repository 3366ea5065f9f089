//! probdist - Univariate probability distributions with tail-accurate numerics
//!
//! probdist provides continuous and discrete distributions with densities,
//! cumulative and survival probabilities, quantiles, moments and sampling.
//! Formulas are chosen to stay accurate across the whole range of `f64`,
//! including the far tails where naive expressions return 0, 1 or NaN.
//! The regularized incomplete gamma and beta functions are evaluated locally
//! with asymptotic expansions for large shapes. Random variates are drawn
//! from any `rand::Rng`.
//!
//! # Modules
//!
//! - [`stats`] - Distribution traits, families, saddle-point terms, quantile search
//! - [`optimize`] - Scalar monotone root finding used by the quantile search
//!
//! # Example
//!
//! ```
//! use probdist::stats::{Binomial, DiscreteDistribution, Logistic, ContinuousDistribution};
//!
//! let logistic = Logistic::new(0.0, 1.0).unwrap();
//! assert_eq!(logistic.pdf(0.0), 0.25);
//!
//! let b = Binomial::new(100_000, 0.5).unwrap();
//! assert!((b.pmf(50_000) - 0.0025231262141967399).abs() < 1e-12);
//! ```

pub mod optimize;
pub mod stats;
