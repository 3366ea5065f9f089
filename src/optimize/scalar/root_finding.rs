//! Root finding for monotone predicates.

use super::{RootResult, ScalarOptions};
use crate::optimize::error::{OptimizeError, OptimizeResult};

/// An interval `[lo, hi]` known to contain the switch point of a monotone
/// predicate: the predicate is `false` at `lo` (or `lo` is the lower end of
/// the search domain) and `true` at `hi` (or `hi` is the upper end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Left endpoint
    pub lo: f64,
    /// Right endpoint
    pub hi: f64,
    /// Number of predicate evaluations spent establishing the bracket
    pub evaluations: usize,
}

/// Establish a finite bracket for a monotone predicate over `[lower, upper]`.
///
/// Starting from `start` (moved inside the domain if needed), an unbounded
/// side is explored with doubling step sizes until the predicate flips or the
/// finite doubles run out. A bounded side is used as-is.
///
/// # Arguments
/// * `pred` - Predicate that is `false` then `true` as the argument increases
/// * `lower` - Lower end of the domain (may be `-inf`)
/// * `upper` - Upper end of the domain (may be `+inf`)
/// * `start` - Initial guess
///
/// # Errors
/// * `InvalidInterval` if `lower > upper` or either is NaN
pub fn bracket_monotone<P>(pred: P, lower: f64, upper: f64, start: f64) -> OptimizeResult<Bracket>
where
    P: Fn(f64) -> bool,
{
    if !(lower <= upper) {
        return Err(OptimizeError::InvalidInterval {
            a: lower,
            b: upper,
            context: "bracket_monotone".to_string(),
        });
    }

    let x0 = initial_point(lower, upper, start);
    let mut evaluations = 1;

    if pred(x0) {
        if lower.is_finite() {
            return Ok(Bracket {
                lo: lower,
                hi: x0,
                evaluations,
            });
        }
        // Walk down until the predicate fails.
        let mut hi = x0;
        let mut step = x0.abs().max(1.0);
        loop {
            let x = hi - step;
            evaluations += 1;
            if x == f64::NEG_INFINITY {
                let lo = if pred(-f64::MAX) { f64::NEG_INFINITY } else { -f64::MAX };
                return Ok(Bracket { lo, hi, evaluations });
            }
            if !pred(x) {
                return Ok(Bracket {
                    lo: x,
                    hi,
                    evaluations,
                });
            }
            hi = x;
            step *= 2.0;
        }
    }

    if upper.is_finite() {
        return Ok(Bracket {
            lo: x0,
            hi: upper,
            evaluations,
        });
    }
    // Walk up until the predicate holds.
    let mut lo = x0;
    let mut step = x0.abs().max(1.0);
    loop {
        let x = lo + step;
        evaluations += 1;
        if x == f64::INFINITY {
            let hi = if pred(f64::MAX) { f64::MAX } else { f64::INFINITY };
            return Ok(Bracket { lo, hi, evaluations });
        }
        if pred(x) {
            return Ok(Bracket {
                lo,
                hi: x,
                evaluations,
            });
        }
        lo = x;
        step *= 2.0;
    }
}

/// Pick a finite point inside `[lower, upper]` close to `start`.
fn initial_point(lower: f64, upper: f64, start: f64) -> f64 {
    if start.is_finite() && start >= lower && start <= upper {
        return start;
    }
    match (lower.is_finite(), upper.is_finite()) {
        (true, true) => 0.5 * lower + 0.5 * upper,
        (true, false) => lower + lower.abs().max(1.0),
        (false, true) => upper - upper.abs().max(1.0),
        (false, false) => 0.0,
    }
}

/// Bisection for the switch point of a monotone predicate.
///
/// Returns the smallest `x` in `[lo, hi]` (to within tolerance) at which
/// `pred(x)` holds. Flat regions are handled naturally: the result is the
/// left edge of the region where the predicate becomes `true`.
///
/// # Arguments
/// * `pred` - Predicate that is `false` then `true` as the argument increases
/// * `lo` - Left bracket endpoint
/// * `hi` - Right bracket endpoint
/// * `options` - Solver options
///
/// # Errors
/// * `InvalidInterval` if `lo > hi` or either is NaN
/// * `DidNotConverge` if iterations exceed `max_iter`
///
/// # Note
/// Convergence is declared when the bracket is narrower than
/// `max(tol, rtol * max(|lo|, |hi|))` or when no double lies strictly
/// between the endpoints. The right endpoint is returned in both cases.
pub fn bisect_monotone<P>(
    pred: P,
    lo: f64,
    hi: f64,
    options: &ScalarOptions,
) -> OptimizeResult<RootResult>
where
    P: Fn(f64) -> bool,
{
    if !(lo <= hi) {
        return Err(OptimizeError::InvalidInterval {
            a: lo,
            b: hi,
            context: "bisect_monotone".to_string(),
        });
    }

    if pred(lo) {
        return Ok(RootResult {
            root: lo,
            iterations: 0,
            bracket_width: 0.0,
        });
    }

    let mut left = lo;
    let mut right = hi;

    for iter in 0..options.max_iter {
        let width = right - left;
        if width <= options.tol || width <= options.rtol * left.abs().max(right.abs()) {
            return Ok(RootResult {
                root: right,
                iterations: iter,
                bracket_width: width,
            });
        }

        let mid = if width.is_finite() {
            left + 0.5 * width
        } else {
            0.5 * left + 0.5 * right
        };
        if mid <= left || mid >= right {
            return Ok(RootResult {
                root: right,
                iterations: iter,
                bracket_width: width,
            });
        }

        if pred(mid) {
            right = mid;
        } else {
            left = mid;
        }
    }

    Err(OptimizeError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.tol,
        context: "bisect_monotone".to_string(),
    })
}

/// Binary search for the smallest integer in `[lo, hi]` at which a monotone
/// predicate holds.
///
/// Returns `hi` when the predicate holds nowhere below it. The midpoint is
/// computed in 128-bit arithmetic so the full `i64` range is safe.
pub fn search_integer<P>(pred: P, lo: i64, hi: i64) -> i64
where
    P: Fn(i64) -> bool,
{
    let mut lo = lo;
    let mut hi = hi;
    while lo < hi {
        let mid = (i128::from(lo) + i128::from(hi)).div_euclid(2) as i64;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
