//! Special functions behind the gamma and binomial probabilities.
//!
//! `lgamma` comes from numr and `erfc` from statrs. The regularized
//! incomplete gamma and beta functions are evaluated here rather than taken
//! from numr, whose kernels stop after a fixed 200 iterations and form their
//! prefactors from differences of `lgamma`. Both lose all accuracy once the
//! shape parameters reach the tens of thousands.
//!
//! Each is computed as a (lower, upper) pair in which the smaller tail is
//! evaluated directly and the other taken as its complement.

mod incomplete_beta;
mod incomplete_gamma;

pub use incomplete_beta::betainc;
pub use incomplete_gamma::{gammainc, gammaincc};

use numr::algorithm::special::scalar as numr_special;

/// ln(sqrt(2π))
pub const LN_SQRT_2PI: f64 = 0.9189385332046727;

/// Log-gamma function.
pub fn lgamma(x: f64) -> f64 {
    numr_special::lgamma_scalar(x)
}

/// Complementary error function, accurate to full precision in the tail.
pub fn erfc(x: f64) -> f64 {
    statrs::function::erf::erfc(x)
}
