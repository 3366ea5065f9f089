//! Generic quantile inversion.
//!
//! Used by every distribution that has no algebraic inverse for its CDF or
//! survival function. The search only relies on monotonicity: it brackets the
//! target with doubling steps over an unbounded support, then bisects on the
//! predicate `cdf(x) >= p` (or `sf(x) <= p`). Flat stretches of the CDF
//! resolve to their left edge, the same tie-break as the discrete quantile
//! `min { k : cdf(k) >= p }`.

use super::distribution::{ContinuousDistribution, DiscreteDistribution};
use super::error::{StatsResult, check_probability};
use crate::optimize::scalar::{ScalarOptions, bisect_monotone, bracket_monotone, search_integer};

/// Inverse CDF by numerical search with [`ScalarOptions::quantile`].
pub fn inverse_cdf<D>(dist: &D, p: f64) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    inverse_cdf_with(dist, p, &ScalarOptions::quantile())
}

/// Inverse CDF by numerical search with caller-supplied tolerances.
///
/// # Errors
/// * `InvalidProbability` if `p` is outside `[0, 1]`
/// * `ConvergenceError` if bisection exceeds `options.max_iter`
pub fn inverse_cdf_with<D>(dist: &D, p: f64, options: &ScalarOptions) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    check_probability(p)?;
    let lower = dist.support_lower_bound();
    let upper = dist.support_upper_bound();
    if p == 0.0 {
        return Ok(lower);
    }
    if p == 1.0 {
        return Ok(upper);
    }

    let reached = |x: f64| dist.cdf(x) >= p;
    search(&reached, lower, upper, dist.mean(), options)
}

/// Inverse survival function by numerical search with [`ScalarOptions::quantile`].
pub fn inverse_sf<D>(dist: &D, p: f64) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    inverse_sf_with(dist, p, &ScalarOptions::quantile())
}

/// Inverse survival function by numerical search with caller-supplied
/// tolerances.
///
/// # Errors
/// * `InvalidProbability` if `p` is outside `[0, 1]`
/// * `ConvergenceError` if bisection exceeds `options.max_iter`
pub fn inverse_sf_with<D>(dist: &D, p: f64, options: &ScalarOptions) -> StatsResult<f64>
where
    D: ContinuousDistribution + ?Sized,
{
    check_probability(p)?;
    let lower = dist.support_lower_bound();
    let upper = dist.support_upper_bound();
    if p == 0.0 {
        return Ok(upper);
    }
    if p == 1.0 {
        return Ok(lower);
    }

    let reached = |x: f64| dist.sf(x) <= p;
    search(&reached, lower, upper, dist.mean(), options)
}

fn search<P>(reached: &P, lower: f64, upper: f64, start: f64, options: &ScalarOptions) -> StatsResult<f64>
where
    P: Fn(f64) -> bool,
{
    let bracket = bracket_monotone(reached, lower, upper, start)?;
    let result = bisect_monotone(reached, bracket.lo, bracket.hi, options)?;
    Ok(result.root)
}

/// Discrete inverse CDF: the smallest `k` in the support with `cdf(k) >= p`.
///
/// # Errors
/// `InvalidProbability` if `p` is outside `[0, 1]`.
pub fn inverse_cdf_discrete<D>(dist: &D, p: f64) -> StatsResult<i64>
where
    D: DiscreteDistribution + ?Sized,
{
    check_probability(p)?;
    let lower = dist.support_lower_bound();
    let upper = dist.support_upper_bound();
    if p == 0.0 {
        return Ok(lower);
    }
    if p == 1.0 {
        return Ok(upper);
    }
    Ok(search_integer(|k| dist.cdf(k) >= p, lower, upper))
}

/// Discrete inverse survival function: the smallest `k` in the support with
/// `sf(k) <= p`.
///
/// # Errors
/// `InvalidProbability` if `p` is outside `[0, 1]`.
pub fn inverse_sf_discrete<D>(dist: &D, p: f64) -> StatsResult<i64>
where
    D: DiscreteDistribution + ?Sized,
{
    check_probability(p)?;
    let lower = dist.support_lower_bound();
    let upper = dist.support_upper_bound();
    if p == 0.0 {
        return Ok(upper);
    }
    if p == 1.0 {
        return Ok(lower);
    }
    Ok(search_integer(|k| dist.sf(k) <= p, lower, upper))
}
