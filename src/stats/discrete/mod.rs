//! Discrete probability distributions.

mod binomial;

pub use binomial::Binomial;
