//! Binomial distribution.

use rand::Rng;

use crate::optimize::scalar::search_integer;
use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::saddle_point::log_binomial_probability;
use crate::stats::special;

/// Binomial distribution.
///
/// The binomial distribution models the number of successes in n independent
/// Bernoulli trials with success probability p.
///
/// P(X = k) = C(n, k) p^k (1-p)^(n-k)
///
/// Interior masses go through the saddle-point expansion, so `n` may be far
/// beyond the range where C(n, k) is representable. The masses at `k = 0`
/// and `k = n`, where the coefficient is 1, are computed once from powers.
///
/// # Examples
///
/// ```
/// use probdist::stats::{Binomial, DiscreteDistribution, Distribution};
///
/// // 10 coin flips with fair coin
/// let b = Binomial::new(10, 0.5).unwrap();
/// assert!((b.pmf(5) - 252.0 / 1024.0).abs() < 1e-15);
/// assert_eq!(b.mean(), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial {
    /// Number of trials
    n: i64,
    /// Success probability
    p: f64,
    /// P(X = 0)
    pmf0: f64,
    /// P(X = n)
    pmfn: f64,
}

impl Binomial {
    /// Create a new binomial distribution.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of trials (must be >= 0)
    /// * `p` - Probability of success on each trial (must be in [0, 1])
    pub fn new(n: i64, p: f64) -> StatsResult<Self> {
        if n < 0 {
            return Err(StatsError::invalid_parameter(
                "n",
                n as f64,
                "number of trials must not be negative",
            ));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::invalid_parameter(
                "p",
                p,
                "probability must be in [0, 1]",
            ));
        }
        // -0.0 would leak into probabilities as a negative zero
        let p = p.abs();
        let nf = n as f64;
        let pmf0 = if p >= 0.5 {
            (1.0 - p).powf(nf)
        } else {
            (nf * (-p).ln_1p()).exp()
        };
        Ok(Self {
            n,
            p,
            pmf0,
            pmfn: p.powf(nf),
        })
    }

    /// Get the number of trials.
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Get the success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Binomial {
    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn var(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    fn median(&self) -> f64 {
        // floor(np); range probabilities only compare against it
        (self.n as f64 * self.p).floor()
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, k: i64) -> f64 {
        if k < 0 || k > self.n {
            0.0
        } else if k == 0 {
            self.pmf0
        } else if k == self.n {
            self.pmfn
        } else {
            log_binomial_probability(k, self.n, self.p, 1.0 - self.p).exp()
        }
    }

    fn log_pmf(&self, k: i64) -> f64 {
        if self.n == 0 {
            return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if k < 0 || k > self.n {
            return f64::NEG_INFINITY;
        }
        log_binomial_probability(k, self.n, self.p, 1.0 - self.p)
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < 0 {
            0.0
        } else if k >= self.n {
            1.0
        } else if k == 0 {
            self.pmf0
        } else {
            // CDF = I_{1-p}(n-k, k+1)
            let q = 1.0 - self.p;
            special::betainc((self.n - k) as f64, (k + 1) as f64, q, self.p).clamp(0.0, 1.0)
        }
    }

    fn sf(&self, k: i64) -> f64 {
        if k < 0 {
            1.0
        } else if k >= self.n {
            0.0
        } else if k == self.n - 1 {
            self.pmfn
        } else {
            // SF = P(X > k) = I_p(k+1, n-k)
            let q = 1.0 - self.p;
            special::betainc((k + 1) as f64, (self.n - k) as f64, self.p, q).clamp(0.0, 1.0)
        }
    }

    fn support_lower_bound(&self) -> i64 {
        if self.p < 1.0 { 0 } else { self.n }
    }

    fn support_upper_bound(&self) -> i64 {
        if self.p > 0.0 { self.n } else { 0 }
    }
}

impl rand::distr::Distribution<i64> for Binomial {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        // Inverse transform: smallest k with cdf(k) > u, u in [0, 1)
        let u: f64 = rng.random();
        search_integer(
            |k| self.cdf(k) > u,
            self.support_lower_bound(),
            self.support_upper_bound(),
        )
    }
}
