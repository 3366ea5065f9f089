//! Chi-squared distribution.

use rand::Rng;

use super::Gamma;
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Chi-squared distribution.
///
/// The chi-squared distribution with k degrees of freedom is a special case
/// of the gamma distribution: χ²(k) = Gamma(k/2, 1/2).
///
/// f(x) = (1 / (2^(k/2) Γ(k/2))) x^(k/2-1) exp(-x/2)  for x > 0
///
/// Every query is answered by the underlying gamma distribution, including
/// quantiles and sampling.
///
/// # Examples
///
/// ```
/// use probdist::stats::{ChiSquared, ContinuousDistribution, Distribution};
///
/// let chi2 = ChiSquared::new(5.0).unwrap();
/// assert_eq!(chi2.mean(), 5.0);
/// let q95 = chi2.ppf(0.95).unwrap();
/// assert!((q95 - 11.0704976935).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChiSquared {
    /// Degrees of freedom
    k: f64,
    /// Underlying gamma distribution
    gamma: Gamma,
}

impl ChiSquared {
    /// Create a new chi-squared distribution with k degrees of freedom.
    ///
    /// # Arguments
    ///
    /// * `k` - Degrees of freedom (must be positive, need not be an integer)
    ///
    /// # Errors
    ///
    /// Returns an error if k is not positive and finite.
    pub fn new(k: f64) -> StatsResult<Self> {
        if !(k > 0.0 && k.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "k",
                k,
                "degrees of freedom must be positive and finite",
            ));
        }
        // χ²(k) = Gamma(k/2, 1/2)
        let gamma = Gamma::new(k / 2.0, 0.5)?;
        Ok(Self { k, gamma })
    }

    /// Get the degrees of freedom.
    pub fn df(&self) -> f64 {
        self.k
    }
}

impl Distribution for ChiSquared {
    fn mean(&self) -> f64 {
        self.gamma.mean()
    }

    fn var(&self) -> f64 {
        self.gamma.var()
    }

    fn median(&self) -> f64 {
        self.gamma.median()
    }
}

impl ContinuousDistribution for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        self.gamma.pdf(x)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        self.gamma.log_pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.gamma.cdf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        self.gamma.sf(x)
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        self.gamma.ppf(p)
    }

    fn isf(&self, p: f64) -> StatsResult<f64> {
        self.gamma.isf(p)
    }

    fn support_lower_bound(&self) -> f64 {
        self.gamma.support_lower_bound()
    }

    fn support_upper_bound(&self) -> f64 {
        self.gamma.support_upper_bound()
    }

    fn is_support_connected(&self) -> bool {
        self.gamma.is_support_connected()
    }
}

impl rand::distr::Distribution<f64> for ChiSquared {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.gamma.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const PROBS: [f64; 10] = [0.001, 0.01, 0.025, 0.05, 0.1, 0.999, 0.990, 0.975, 0.950, 0.900];

    // Quantiles of χ²(5)
    const QUANTILES: [f64; 10] = [
        0.210212602629,
        0.554298076728,
        0.831211613487,
        1.14547622606,
        1.61030798696,
        20.5150056524,
        15.0862724694,
        12.8325019940,
        11.0704976935,
        9.23635689978,
    ];

    fn rel_err(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn test_chi_squared_creation() {
        let chi2 = ChiSquared::new(5.0).unwrap();
        assert_eq!(chi2.df(), 5.0);
        assert!(ChiSquared::new(0.1).is_ok());

        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(-3.0).is_err());
        assert!(ChiSquared::new(f64::NAN).is_err());
        assert!(ChiSquared::new(f64::INFINITY).is_err());

        let err = ChiSquared::new(-3.0).unwrap_err();
        assert!(err.to_string().contains("degrees of freedom"));
    }

    #[test]
    fn test_chi_squared_moments() {
        let chi2 = ChiSquared::new(5.0).unwrap();
        assert_eq!(chi2.mean(), 5.0);
        assert_eq!(chi2.var(), 10.0);
        assert_eq!(chi2.support_lower_bound(), 0.0);
        assert_eq!(chi2.support_upper_bound(), f64::INFINITY);
        assert!(chi2.is_support_connected());
    }

    #[test]
    fn test_chi_squared_matches_gamma() {
        let chi2 = ChiSquared::new(7.5).unwrap();
        let gamma = Gamma::new(3.75, 0.5).unwrap();
        for &x in &[0.0, 0.3, 2.0, 7.5, 30.0] {
            assert_eq!(chi2.pdf(x), gamma.pdf(x));
            assert_eq!(chi2.cdf(x), gamma.cdf(x));
            assert_eq!(chi2.sf(x), gamma.sf(x));
        }
        assert_eq!(chi2.mean(), gamma.mean());
        assert_eq!(chi2.var(), gamma.var());
        assert_eq!(chi2.ppf(0.3).unwrap(), gamma.ppf(0.3).unwrap());
    }

    #[test]
    fn test_chi_squared_cdf() {
        let chi2 = ChiSquared::new(5.0).unwrap();
        for (&x, &p) in QUANTILES.iter().zip(PROBS.iter()) {
            assert!((chi2.cdf(x) - p).abs() < 1e-9, "x={}", x);
            assert!((chi2.sf(x) - (1.0 - p)).abs() < 1e-9, "x={}", x);
        }
        assert!((chi2.cdf(1.145476226) - 0.05).abs() < 1e-9);
        assert_eq!(chi2.cdf(0.0), 0.0);
        assert_eq!(chi2.cdf(-1.0), 0.0);
        assert_eq!(chi2.cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_chi_squared_tail_precision() {
        let chi2 = ChiSquared::new(5.0).unwrap();
        assert!(rel_err(chi2.cdf(1e-7), 1.6820882879388572e-19) < 1e-10);
        assert!(rel_err(chi2.cdf(4e-7), 5.382681944688393e-18) < 1e-10);
        assert!(rel_err(chi2.sf(93.0), 1.5731947657596637e-18) < 1e-10);
        assert!(rel_err(chi2.sf(97.3), 1.9583114656146269e-19) < 1e-10);
    }

    #[test]
    fn test_chi_squared_ppf() {
        let chi2 = ChiSquared::new(5.0).unwrap();
        for (&x, &p) in QUANTILES.iter().zip(PROBS.iter()) {
            let q = chi2.ppf(p).unwrap();
            assert!((q - x).abs() < 1e-9 * x.max(1.0), "p={}", p);
        }
        assert_eq!(chi2.ppf(0.0).unwrap(), 0.0);
        assert_eq!(chi2.ppf(1.0).unwrap(), f64::INFINITY);
        assert!(chi2.ppf(1.5).is_err());

        for &p in &[0.1, 0.5, 0.9] {
            let x = chi2.isf(p).unwrap();
            assert!((chi2.sf(x) - p).abs() < 1e-12);
        }
    }

    #[test]
    fn test_chi_squared_large_df() {
        let chi2 = ChiSquared::new(2e5).unwrap();
        assert!((chi2.ppf(0.5).unwrap() - 199999.3333337284).abs() < 1e-6);
        assert!((chi2.median() - 199999.3333337284).abs() < 1e-6);

        let chi2 = ChiSquared::new(2e7).unwrap();
        assert!(rel_err(chi2.cdf(2e7), 0.50004205220872369833) < 1e-12);
        assert!(rel_err(chi2.sf(2e7), 0.49995794779127630167) < 1e-12);
    }

    #[test]
    fn test_chi_squared_small_df() {
        let chi2 = ChiSquared::new(0.1).unwrap();
        let cases = [
            (0.001, 1.1689264114573004e-60),
            (0.1, 1.1689264114573012e-20),
            (0.9, 0.15263422781837699),
            (0.999, 5.4729171974573511),
        ];
        for &(p, x) in &cases {
            assert!((chi2.cdf(x) - p).abs() < 1e-12, "p={}", p);
            assert!(rel_err(chi2.ppf(p).unwrap(), x) < 1e-9, "p={}", p);
        }
    }

    #[test]
    fn test_chi_squared_pdf() {
        let chi2 = ChiSquared::new(5.0).unwrap();
        let densities = [0.0115379817652, 0.0919455953114, 0.000433630076361];
        for (&x, &d) in [QUANTILES[0], QUANTILES[3], QUANTILES[5]].iter().zip(densities.iter()) {
            assert!(rel_err(chi2.pdf(x), d) < 1e-10, "x={}", x);
            assert!((chi2.log_pdf(x) - d.ln()).abs() < 1e-10);
        }

        let xs = [1e-6, 0.5, 1.0, 2.0, 5.0];
        let chi1 = ChiSquared::new(1.0).unwrap();
        let df1 = [398.94208093034, 0.43939128947, 0.24197072452, 0.10377687436, 0.01464498256];
        let chi2 = ChiSquared::new(2.0).unwrap();
        let df2 = [0.49999975, 0.38940039154, 0.30326532986, 0.18393972059, 0.04104249931];
        for i in 0..xs.len() {
            assert!(rel_err(chi1.pdf(xs[i]), df1[i]) < 1e-9, "x={}", xs[i]);
            assert!(rel_err(chi2.pdf(xs[i]), df2[i]) < 1e-9, "x={}", xs[i]);
        }
        assert_eq!(chi1.pdf(-0.1), 0.0);
        assert_eq!(chi2.pdf(-0.1), 0.0);
        assert_eq!(chi1.pdf(0.0), f64::INFINITY);
        assert_eq!(chi2.pdf(0.0), 0.5);
    }

    #[test]
    fn test_chi_squared_sampler() {
        let chi2 = ChiSquared::new(4.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(99);
        let n = 20_000;
        let mean = chi2.sampler(&mut rng).take(n).sum::<f64>() / n as f64;
        assert!((mean - 4.0).abs() < 5.0 * chi2.std() / (n as f64).sqrt());
    }
}
