//! Univariate probability distributions.
//!
//! Every family implements [`Distribution`] for its moments and either
//! [`ContinuousDistribution`] or [`DiscreteDistribution`] for densities,
//! cumulative and survival probabilities, quantiles and support bounds.
//! Families also implement `rand::distr::Distribution`, so they plug into
//! `Rng::sample` directly or through [`Sampler`].
//!
//! ```
//! use probdist::stats::{ChiSquared, ContinuousDistribution, Distribution};
//!
//! let chi2 = ChiSquared::new(5.0).unwrap();
//! assert_eq!(chi2.mean(), 5.0);
//! assert!((chi2.cdf(1.145476226) - 0.05).abs() < 1e-9);
//! ```
//!
//! # Numerical approach
//!
//! - Densities that underflow have a direct log-space counterpart.
//! - Survival functions are evaluated directly rather than as `1 - cdf`.
//! - Binomial and gamma terms go through the saddle-point expansion in
//!   [`saddle_point`].
//! - Families without a closed-form inverse fall back to the monotone search
//!   in [`quantile`].

mod continuous;
mod discrete;
mod distribution;
mod error;
mod special;

pub mod quantile;
pub mod saddle_point;

// Public API: Distribution traits and types
pub use distribution::{ContinuousDistribution, DiscreteDistribution, Distribution, Sampler};
pub use error::{StatsError, StatsResult};

// Public API: Continuous distributions
pub use continuous::{ChiSquared, Gamma, Laplace, Logistic, Pareto};

// Public API: Discrete distributions
pub use discrete::Binomial;
