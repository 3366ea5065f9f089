//! Continuous probability distributions.

mod chi_squared;
mod gamma;
mod laplace;
mod logistic;
mod pareto;

pub use chi_squared::ChiSquared;
pub use gamma::Gamma;
pub use laplace::Laplace;
pub use logistic::Logistic;
pub use pareto::Pareto;
