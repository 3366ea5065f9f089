//! Pareto distribution.

use rand::Rng;
use rand::distr::Open01;

use crate::stats::error::{StatsError, StatsResult, check_probability};
use crate::stats::{ContinuousDistribution, Distribution};

/// Pareto distribution (Type I).
///
/// The Pareto distribution is a power-law probability distribution with PDF:
///
/// f(x; xₘ, α) = α * xₘ^α / x^(α+1)  for x ≥ xₘ
///
/// where:
/// - xₘ > 0 is the scale parameter (minimum value)
/// - α > 0 is the shape parameter (tail index)
///
/// The shape may be infinite, in which case all mass sits at xₘ. Tail
/// probabilities are computed from α·ln(xₘ/x) so they keep full relative
/// precision next to xₘ and far out in the tail.
///
/// # Example
///
/// ```
/// use probdist::stats::{Pareto, ContinuousDistribution, Distribution};
///
/// let p = Pareto::new(1.0, 2.0).unwrap();  // scale=1, shape=2
/// assert_eq!(p.pdf(1.0), 2.0);
/// assert_eq!(p.mean(), 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pareto {
    /// Scale parameter (minimum value, xₘ > 0)
    scale: f64,
    /// Shape parameter (tail index, α > 0)
    shape: f64,
    /// α * xₘ^α, may overflow or underflow
    density_factor: f64,
    /// ln(α)
    log_shape: f64,
}

impl Pareto {
    /// Create a new Pareto distribution.
    ///
    /// # Arguments
    ///
    /// * `scale` - Scale parameter xₘ (must be > 0 and finite)
    /// * `shape` - Shape parameter α (must be > 0, may be infinite)
    pub fn new(scale: f64, shape: f64) -> StatsResult<Self> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "scale",
                scale,
                "scale parameter must be positive and finite",
            ));
        }
        if !(shape > 0.0) {
            return Err(StatsError::invalid_parameter(
                "shape",
                shape,
                "shape parameter must be positive",
            ));
        }
        Ok(Self {
            scale,
            shape,
            density_factor: shape * scale.powf(shape),
            log_shape: shape.ln(),
        })
    }

    /// Create a Pareto distribution with unit scale.
    pub fn standard(shape: f64) -> StatsResult<Self> {
        Self::new(1.0, shape)
    }

    /// Get the scale parameter xₘ.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Get the shape parameter α.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// α·ln(xₘ/x) for x > xₘ; the log of the survival probability.
    fn log_sf(&self, x: f64) -> f64 {
        self.shape * (self.scale / x).ln()
    }
}

impl Distribution for Pareto {
    fn mean(&self) -> f64 {
        if self.shape <= 1.0 {
            f64::INFINITY
        } else {
            self.scale / (1.0 - 1.0 / self.shape)
        }
    }

    fn var(&self) -> f64 {
        if self.shape <= 2.0 {
            f64::INFINITY
        } else {
            let am1 = self.shape - 1.0;
            self.scale * self.scale / (am1 * am1 * (1.0 - 2.0 / self.shape))
        }
    }

    fn median(&self) -> f64 {
        self.scale * 2.0_f64.powf(1.0 / self.shape)
    }
}

impl ContinuousDistribution for Pareto {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            return 0.0;
        }
        if self.shape == f64::INFINITY {
            return if x == self.scale { f64::INFINITY } else { 0.0 };
        }
        if self.density_factor.is_finite() && self.density_factor > 0.0 {
            let d = self.density_factor / x.powf(self.shape + 1.0);
            if d.is_finite() && d > 0.0 {
                return d;
            }
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            return f64::NEG_INFINITY;
        }
        if self.shape == f64::INFINITY {
            return if x == self.scale {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        self.log_shape - x.ln() + self.shape * (self.scale / x).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.scale {
            return 0.0;
        }
        -self.log_sf(x).exp_m1()
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.scale {
            return 1.0;
        }
        self.log_sf(x).exp()
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        check_probability(p)?;
        if p == 0.0 {
            return Ok(self.scale);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.scale / ((-p).ln_1p() / self.shape).exp())
    }

    fn isf(&self, p: f64) -> StatsResult<f64> {
        check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::INFINITY);
        }
        if p == 1.0 {
            return Ok(self.scale);
        }
        Ok(self.scale / (p.ln() / self.shape).exp())
    }

    fn support_lower_bound(&self) -> f64 {
        self.scale
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }
}

impl rand::distr::Distribution<f64> for Pareto {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // U and 1-U are both uniform; invert the survival function
        let u: f64 = rng.sample(Open01);
        self.scale / (u.ln() / self.shape).exp()
    }
}
