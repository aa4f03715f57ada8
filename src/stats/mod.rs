//! Statistical kernels shared by the estimators
//!
//! Small, self-contained f64 routines: bootstrap resampling, percentiles,
//! ordinary least squares, and a gaussian sampler. Everything that draws
//! random numbers takes the generator as an explicit parameter so callers
//! stay reproducible with a seeded `StdRng`.

mod bootstrap;
mod regression;


pub use bootstrap::{bootstrap_mean_ci, percentile, BootstrapCi};
pub use regression::{linear_fit, LinearFit};

use rand::Rng;

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample from a standard normal distribution via the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-12);
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
