//! Distribution traits shared by every family.
//!
//! [`Distribution`] carries the moments, [`ContinuousDistribution`] and
//! [`DiscreteDistribution`] carry the probability functions. Default methods
//! derive survival probabilities, log densities and quantiles from the
//! required pieces; families override them whenever a direct formula is more
//! accurate.

use std::marker::PhantomData;

use rand::Rng;

use super::error::{StatsError, StatsResult};
use super::quantile;

/// Moments and location summaries common to all distributions.
pub trait Distribution {
    /// Mean (expected value). May be infinite.
    fn mean(&self) -> f64;

    /// Variance. May be infinite.
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Median of the distribution.
    fn median(&self) -> f64;
}

/// A univariate distribution over the extended real line.
///
/// Out-of-support arguments are never errors: densities evaluate to 0, log
/// densities to `-inf`, and probabilities saturate at exactly 0 or 1.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the density.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function P(X <= x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Percent point function (inverse CDF).
    ///
    /// Returns the smallest `x` with `cdf(x) >= p`. `p = 0` and `p = 1` map to
    /// the support bounds.
    ///
    /// # Errors
    /// `InvalidProbability` if `p` is outside `[0, 1]` or NaN.
    fn ppf(&self, p: f64) -> StatsResult<f64> {
        quantile::inverse_cdf(self, p)
    }

    /// Inverse survival function.
    ///
    /// Returns the smallest `x` with `sf(x) <= p`. `p = 1` and `p = 0` map to
    /// the lower and upper support bounds.
    ///
    /// # Errors
    /// `InvalidProbability` if `p` is outside `[0, 1]` or NaN.
    fn isf(&self, p: f64) -> StatsResult<f64> {
        quantile::inverse_sf(self, p)
    }

    /// Lower bound of the support.
    fn support_lower_bound(&self) -> f64;

    /// Upper bound of the support.
    fn support_upper_bound(&self) -> f64;

    /// Whether the support is a single interval.
    fn is_support_connected(&self) -> bool {
        true
    }

    /// Bind this distribution to a uniform random source.
    fn sampler<'a, R>(&'a self, rng: &'a mut R) -> Sampler<'a, Self, R, f64>
    where
        Self: Sized + rand::distr::Distribution<f64>,
        R: Rng + ?Sized,
    {
        Sampler::new(self, rng)
    }
}

/// A univariate distribution over the integers.
pub trait DiscreteDistribution: Distribution {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: i64) -> f64;

    /// Natural log of the probability mass.
    fn log_pmf(&self, k: i64) -> f64 {
        self.pmf(k).ln()
    }

    /// Probability mass in the closed range `[k0, k1]`.
    ///
    /// Equal to `cdf(k1) - cdf(k0 - 1)` within rounding. When the range lies
    /// above the median the difference of survival probabilities is used
    /// instead, so upper tail ranges do not cancel against a CDF close to 1.
    ///
    /// # Errors
    /// `InvalidParameter` if `k0 > k1`.
    fn range_probability(&self, k0: i64, k1: i64) -> StatsResult<f64> {
        if k0 > k1 {
            return Err(StatsError::InvalidParameter {
                name: "k0".to_string(),
                value: k0 as f64,
                reason: format!("lower end of range must not exceed k1 = {k1}"),
            });
        }
        if k0 <= self.support_lower_bound() {
            return Ok(self.cdf(k1));
        }
        let below = k0 - 1;
        let p = if below as f64 >= self.median() {
            self.sf(below) - self.sf(k1)
        } else {
            self.cdf(k1) - self.cdf(below)
        };
        Ok(p.max(0.0))
    }

    /// Cumulative distribution function P(X <= k).
    fn cdf(&self, k: i64) -> f64;

    /// Survival function P(X > k).
    fn sf(&self, k: i64) -> f64 {
        1.0 - self.cdf(k)
    }

    /// Percent point function: the smallest `k` with `cdf(k) >= p`.
    ///
    /// # Errors
    /// `InvalidProbability` if `p` is outside `[0, 1]` or NaN.
    fn ppf(&self, p: f64) -> StatsResult<i64> {
        quantile::inverse_cdf_discrete(self, p)
    }

    /// Inverse survival function: the smallest `k` with `sf(k) <= p`.
    ///
    /// # Errors
    /// `InvalidProbability` if `p` is outside `[0, 1]` or NaN.
    fn isf(&self, p: f64) -> StatsResult<i64> {
        quantile::inverse_sf_discrete(self, p)
    }

    /// Lower bound of the support.
    fn support_lower_bound(&self) -> i64;

    /// Upper bound of the support.
    fn support_upper_bound(&self) -> i64;

    /// Whether every integer between the bounds has positive mass.
    fn is_support_connected(&self) -> bool {
        true
    }

    /// Bind this distribution to a uniform random source.
    fn sampler<'a, R>(&'a self, rng: &'a mut R) -> Sampler<'a, Self, R, i64>
    where
        Self: Sized + rand::distr::Distribution<i64>,
        R: Rng + ?Sized,
    {
        Sampler::new(self, rng)
    }
}

/// A distribution bound to a uniform random source.
///
/// Each call to [`Sampler::sample`] advances the borrowed generator; the
/// sampler keeps no other state. It is also an endless [`Iterator`].
///
/// ```
/// use probdist::stats::{ContinuousDistribution, Laplace};
/// use rand::SeedableRng;
///
/// let laplace = Laplace::new(1.0, 2.0).unwrap();
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
/// let draws: Vec<f64> = laplace.sampler(&mut rng).take(3).collect();
/// assert_eq!(draws.len(), 3);
/// ```
pub struct Sampler<'a, D: ?Sized, R: ?Sized, T> {
    dist: &'a D,
    rng: &'a mut R,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, D, R, T> Sampler<'a, D, R, T>
where
    D: rand::distr::Distribution<T> + ?Sized,
    R: Rng + ?Sized,
{
    /// Create a sampler drawing from `dist` with `rng`.
    pub fn new(dist: &'a D, rng: &'a mut R) -> Self {
        Self {
            dist,
            rng,
            _marker: PhantomData,
        }
    }

    /// Draw one variate.
    pub fn sample(&mut self) -> T {
        self.dist.sample(&mut *self.rng)
    }
}

impl<D, R, T> Iterator for Sampler<'_, D, R, T>
where
    D: rand::distr::Distribution<T> + ?Sized,
    R: Rng + ?Sized,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.sample())
    }
}
