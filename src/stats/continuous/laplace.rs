//! Laplace (double exponential) distribution.

use rand::Rng;
use rand::distr::Open01;

use crate::stats::error::{StatsError, StatsResult, check_probability};
use crate::stats::{ContinuousDistribution, Distribution};

/// Laplace (double exponential) distribution.
///
/// The Laplace distribution is a continuous probability distribution with PDF:
///
/// f(x; μ, b) = 1/(2b) * exp(-|x - μ|/b)
///
/// where:
/// - μ is the location parameter (mean, median, mode)
/// - b > 0 is the scale parameter
///
/// It can be thought of as two exponential distributions spliced at the mean,
/// or as the distribution of the difference of two i.i.d. exponential random variables.
///
/// # Example
///
/// ```
/// use probdist::stats::{Laplace, ContinuousDistribution};
///
/// let l = Laplace::new(0.0, 1.0).unwrap();  // standard Laplace
/// assert_eq!(l.pdf(0.0), 0.5);
/// assert_eq!(l.cdf(0.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Laplace {
    /// Location parameter (mean)
    loc: f64,
    /// Scale parameter
    scale: f64,
    /// ln(2b)
    log_2scale: f64,
}

impl Laplace {
    /// Create a new Laplace distribution.
    ///
    /// # Arguments
    ///
    /// * `loc` - Location parameter (mean, median, mode)
    /// * `scale` - Scale parameter (must be > 0)
    pub fn new(loc: f64, scale: f64) -> StatsResult<Self> {
        if !loc.is_finite() {
            return Err(StatsError::invalid_parameter(
                "loc",
                loc,
                "location parameter must be finite",
            ));
        }
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "scale",
                scale,
                "scale parameter must be positive and finite",
            ));
        }
        Ok(Self {
            loc,
            scale,
            log_2scale: (2.0 * scale).ln(),
        })
    }

    /// Create the standard Laplace distribution (loc=0, scale=1).
    pub fn standard() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
            log_2scale: std::f64::consts::LN_2,
        }
    }

    /// Get the location parameter.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Closed-form inverse CDF for `p` in (0, 1).
    fn inverse_cdf(&self, p: f64) -> f64 {
        let z = if p > 0.5 {
            -(2.0 - 2.0 * p).ln()
        } else {
            (2.0 * p).ln()
        };
        self.loc + self.scale * z
    }
}

impl Distribution for Laplace {
    fn mean(&self) -> f64 {
        self.loc
    }

    fn var(&self) -> f64 {
        2.0 * self.scale * self.scale
    }

    fn median(&self) -> f64 {
        self.loc
    }
}

impl ContinuousDistribution for Laplace {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc).abs() / self.scale;
        (-z).exp() / (2.0 * self.scale)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc).abs() / self.scale;
        -z - self.log_2scale
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.loc {
            0.5 * ((x - self.loc) / self.scale).exp()
        } else {
            1.0 - 0.5 * ((self.loc - x) / self.scale).exp()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.loc {
            1.0 - 0.5 * ((x - self.loc) / self.scale).exp()
        } else {
            0.5 * ((self.loc - x) / self.scale).exp()
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.inverse_cdf(p))
    }

    fn isf(&self, p: f64) -> StatsResult<f64> {
        check_probability(p)?;
        if p == 0.0 {
            return Ok(f64::INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        let z = if p > 0.5 {
            (2.0 - 2.0 * p).ln()
        } else {
            -(2.0 * p).ln()
        };
        Ok(self.loc + self.scale * z)
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }
}

impl rand::distr::Distribution<f64> for Laplace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.sample(Open01);
        self.inverse_cdf(u)
    }
}
