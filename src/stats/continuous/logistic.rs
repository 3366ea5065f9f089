//! Logistic distribution.

use std::f64::consts::PI;

use rand::Rng;
use rand::distr::Open01;

use crate::stats::error::{StatsError, StatsResult, check_probability};
use crate::stats::{ContinuousDistribution, Distribution};

/// Logistic distribution.
///
/// The logistic distribution with location μ and scale s > 0 has PDF:
///
/// f(x; μ, s) = exp(-z) / (s (1 + exp(-z))²),  z = (x - μ)/s
///
/// and CDF 1 / (1 + exp(-z)). The density is symmetric in z, so it is
/// evaluated at |z| where exp(-|z|) cannot overflow.
///
/// # Example
///
/// ```
/// use probdist::stats::{Logistic, ContinuousDistribution};
///
/// let l = Logistic::new(0.0, 1.0).unwrap();
/// assert_eq!(l.pdf(0.0), 0.25);
/// assert_eq!(l.ppf(0.5).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logistic {
    /// Location parameter (mean, median, mode)
    loc: f64,
    /// Scale parameter
    scale: f64,
    /// ln(s)
    log_scale: f64,
}

impl Logistic {
    /// Create a new logistic distribution.
    ///
    /// # Arguments
    ///
    /// * `loc` - Location parameter
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
            log_scale: scale.ln(),
        })
    }

    /// Create the standard logistic distribution (loc=0, scale=1).
    pub fn standard() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
            log_scale: 0.0,
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
    ///
    /// logit(p) is written as ±ln1p(...) on each half so the log argument
    /// never sits next to 1 and `p = 0.5` maps to μ exactly.
    fn inverse_cdf(&self, p: f64) -> f64 {
        if p <= 0.5 {
            self.loc - self.scale * log_odds_against(p)
        } else {
            self.loc + self.scale * log_odds_against(1.0 - p)
        }
    }
}

/// ln((1 - p) / p) for `p` in (0, 0.5].
///
/// `(1 - 2p) / p` overflows once `p` is subnormal; there the two logs are
/// taken separately.
fn log_odds_against(p: f64) -> f64 {
    let ratio = (1.0 - 2.0 * p) / p;
    if p < f64::MIN_POSITIVE || !ratio.is_finite() {
        (-p).ln_1p() - p.ln()
    } else {
        ratio.ln_1p()
    }
}

impl Distribution for Logistic {
    fn mean(&self) -> f64 {
        self.loc
    }

    fn var(&self) -> f64 {
        self.scale * self.scale * PI * PI / 3.0
    }

    fn median(&self) -> f64 {
        self.loc
    }
}

impl ContinuousDistribution for Logistic {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc).abs() / self.scale;
        let v = (-z).exp();
        let denom = 1.0 + v;
        v / (self.scale * denom * denom)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc).abs() / self.scale;
        let v = (-z).exp();
        -self.log_scale - z - 2.0 * v.ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        1.0 / (1.0 + (-z).exp())
    }

    fn sf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        1.0 / (1.0 + z.exp())
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
        let x = if p <= 0.5 {
            self.loc + self.scale * log_odds_against(p)
        } else {
            self.loc - self.scale * log_odds_against(1.0 - p)
        };
        Ok(x)
    }

    fn support_lower_bound(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn support_upper_bound(&self) -> f64 {
        f64::INFINITY
    }
}

impl rand::distr::Distribution<f64> for Logistic {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.sample(Open01);
        self.inverse_cdf(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_logistic_creation() {
        assert!(Logistic::new(0.0, 1.0).is_ok());
        assert!(Logistic::new(0.0, 0.0).is_err());
        assert!(Logistic::new(0.0, -1.0).is_err());
        assert!(Logistic::new(0.0, f64::NAN).is_err());
        assert!(Logistic::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_logistic_standard_values() {
        let l = Logistic::new(0.0, 1.0).unwrap();
        assert_eq!(l.pdf(0.0), 0.25);
        assert_eq!(l.cdf(0.0), 0.5);
        assert_eq!(l.sf(0.0), 0.5);
        assert_eq!(l.ppf(0.5).unwrap(), 0.0);
        assert_eq!(l.isf(0.5).unwrap(), 0.0);
        assert!((l.var() - PI * PI / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_logistic_pdf_symmetry() {
        let l = Logistic::new(1.5, 2.0).unwrap();
        for &d in &[0.1, 1.0, 7.0, 50.0] {
            let (hi, lo) = (l.pdf(1.5 + d), l.pdf(1.5 - d));
            assert!((hi - lo).abs() <= 1e-14 * hi);
        }
        assert_eq!(l.pdf(f64::INFINITY), 0.0);
        assert_eq!(l.pdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_logistic_log_pdf() {
        let l = Logistic::new(-1.0, 0.5).unwrap();
        for &x in &[-30.0, -2.0, -1.0, 0.0, 4.0] {
            assert!((l.log_pdf(x) - l.pdf(x).ln()).abs() < 1e-12);
        }

        let l = Logistic::standard();
        assert_eq!(l.pdf(800.0), 0.0);
        assert_eq!(l.log_pdf(800.0), -800.0);
        assert_eq!(l.log_pdf(-800.0), -800.0);
        assert_eq!(l.log_pdf(f64::INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_logistic_tails() {
        let l = Logistic::standard();
        let tiny = (-50.0_f64).exp();
        assert!((l.cdf(-50.0) - tiny).abs() < 1e-14 * tiny);
        assert!((l.sf(50.0) - tiny).abs() < 1e-14 * tiny);

        assert_eq!(l.cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(l.cdf(f64::INFINITY), 1.0);
        assert_eq!(l.cdf(100.0), 1.0);
        assert_eq!(l.sf(f64::INFINITY), 0.0);
        assert_eq!(l.sf(f64::NEG_INFINITY), 1.0);
        assert_eq!(l.cdf(-1000.0), 0.0);
    }

    #[test]
    fn test_logistic_ppf() {
        let l = Logistic::new(2.0, 3.0).unwrap();
        assert_eq!(l.ppf(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(l.ppf(1.0).unwrap(), f64::INFINITY);
        assert_eq!(l.ppf(0.5).unwrap(), 2.0);

        for &p in &[0.01, 0.2, 0.4, 0.6, 0.8, 0.99] {
            let x = l.ppf(p).unwrap();
            assert!((l.cdf(x) - p).abs() < 1e-14, "p={}", p);
            // logit form agrees on the interior
            let logit = 2.0 + 3.0 * (p / (1.0 - p)).ln();
            assert!((x - logit).abs() < 1e-13);
        }

        let p = 1e-10;
        let x = l.ppf(p).unwrap();
        assert!((l.cdf(x) - p).abs() < 1e-13 * p);

        assert!(l.ppf(-1e-3).is_err());
        assert!(l.ppf(f64::NAN).is_err());
    }

    #[test]
    fn test_logistic_isf() {
        let l = Logistic::new(2.0, 3.0).unwrap();
        assert_eq!(l.isf(0.0).unwrap(), f64::INFINITY);
        assert_eq!(l.isf(1.0).unwrap(), f64::NEG_INFINITY);

        for &p in &[1e-12, 0.1, 0.5, 0.9] {
            let x = l.isf(p).unwrap();
            assert!((l.sf(x) - p).abs() < 1e-13 * p, "p={}", p);
        }
        assert!(l.isf(2.0).is_err());
    }

    #[test]
    fn test_logistic_subnormal_probabilities() {
        let l = Logistic::standard();

        // ln(p / (1 - p)) at the smallest subnormal
        let x = l.ppf(5e-324).unwrap();
        assert!(x.is_finite());
        assert!((x - (-744.44007192138126)).abs() < 1e-12);
        let x = l.isf(5e-324).unwrap();
        assert!((x - 744.44007192138126).abs() < 1e-12);

        let x = l.ppf(1e-310).unwrap();
        assert!((x - (-713.80137882815417)).abs() < 1e-12);
        assert!((l.isf(1e-310).unwrap() + x).abs() < 1e-12);

        // just above the normal range the ratio form still applies
        let x = l.ppf(4.0 * f64::MIN_POSITIVE).unwrap();
        assert!((x - (4.0 * f64::MIN_POSITIVE).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_logistic_cdf_sf_complement() {
        let l = Logistic::new(0.5, 1.5).unwrap();
        for &x in &[-10.0, -1.0, 0.5, 2.0, 10.0] {
            assert!((l.cdf(x) + l.sf(x) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_logistic_sampler() {
        let l = Logistic::new(-1.0, 0.5).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let n = 20_000;
        let draws: Vec<f64> = l.sampler(&mut rng).take(n).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        assert!((mean + 1.0).abs() < 0.05);
        let below = draws.iter().filter(|&&x| x <= -1.0).count() as f64 / n as f64;
        assert!((below - 0.5).abs() < 0.02);
    }
}
