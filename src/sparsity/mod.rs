//! Optimal claw-count estimation from simulated sensitivity curves
//!
//! The analytical simulation produces, for each presynaptic population size
//! m, a table of loss-sensitivity curves: one curve per simulated instance,
//! tabulating the normalized output distortion E[‖dY‖/‖Y‖] over a grid of
//! candidate claw counts K. The estimator takes each instance's argmin,
//! averages them, and wraps the average in a bootstrap confidence interval.
//! Fitting the per-m estimates against m on log-log axes yields the
//! power-law relation between optimal K and population size.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::stats::{bootstrap_mean_ci, linear_fit};
use crate::{Error, Result};

#[cfg(test)]
mod tests;

/// Default number of bootstrap resamples.
pub const DEFAULT_RESAMPLES: usize = 1000;

/// One simulated instance: distortion tabulated over a grid of claw counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCurve {
    /// Candidate claw counts
    pub k: Vec<f64>,
    /// E[‖dY‖/‖Y‖] at each candidate
    pub sensitivity: Vec<f64>,
}

impl SensitivityCurve {
    /// The claw count minimizing distortion, taking the first minimum on ties.
    ///
    /// Returns None for an empty curve. The K grid and sensitivity series
    /// must have equal length; [`estimate_optimal_k`] checks this before
    /// calling.
    #[must_use]
    pub fn optimal_k(&self) -> Option<f64> {
        let mut best: Option<usize> = None;
        for (i, &value) in self.sensitivity.iter().enumerate() {
            match best {
                Some(b) if self.sensitivity[b] <= value => {}
                _ => best = Some(i),
            }
        }
        best.map(|i| self.k[i])
    }
}

/// Optimal claw count with bootstrap uncertainty, on the natural scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalKEstimate {
    /// Mean of the per-instance argmins
    pub optimal_k: f64,
    /// Lower bound of the 95% bootstrap interval
    pub ci_lower: f64,
    /// Upper bound of the 95% bootstrap interval
    pub ci_upper: f64,
    /// K grid of the first curve, for reporting
    pub k_range: Vec<f64>,
    /// Number of instances the estimate aggregates
    pub n_curves: usize,
}

/// Estimate the optimal claw count from a table of sensitivity curves.
///
/// Per curve, the K minimizing the distortion metric is selected; the point
/// estimate is the arithmetic mean of those optima and the 95% interval
/// comes from `n_resamples` bootstrap resamples of the optimum list. A
/// single-curve table yields a degenerate interval equal to the estimate.
///
/// # Errors
///
/// Fails on an empty table, an empty curve, or a curve whose K grid and
/// sensitivity series disagree in length.
///
/// # Example
///
/// ```
/// use olfato::sparsity::{estimate_optimal_k, SensitivityCurve};
/// use rand::SeedableRng;
///
/// let curves = vec![SensitivityCurve {
///     k: vec![1.0, 2.0, 3.0],
///     sensitivity: vec![0.5, 0.1, 0.9],
/// }];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let estimate = estimate_optimal_k(&curves, 1000, &mut rng).unwrap();
/// assert_eq!(estimate.optimal_k, 2.0);
/// assert_eq!((estimate.ci_lower, estimate.ci_upper), (2.0, 2.0));
/// ```
pub fn estimate_optimal_k<R: Rng + ?Sized>(
    curves: &[SensitivityCurve],
    n_resamples: usize,
    rng: &mut R,
) -> Result<OptimalKEstimate> {
    if curves.is_empty() {
        return Err(Error::EmptyTable);
    }

    let mut optima = Vec::with_capacity(curves.len());
    for (index, curve) in curves.iter().enumerate() {
        if curve.k.len() != curve.sensitivity.len() {
            return Err(Error::CurveLengthMismatch {
                index,
                k_len: curve.k.len(),
                s_len: curve.sensitivity.len(),
            });
        }
        optima.push(curve.optimal_k().ok_or(Error::EmptyCurve { index })?);
    }

    let ci = bootstrap_mean_ci(&optima, n_resamples, 0.95, rng);
    Ok(OptimalKEstimate {
        optimal_k: ci.mean,
        ci_lower: ci.lower,
        ci_upper: ci.upper,
        k_range: curves[0].k.clone(),
        n_curves: curves.len(),
    })
}

/// Power-law relation `k = exp(intercept) * m^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLawFit {
    /// Slope of the log-log line
    pub exponent: f64,
    /// Intercept of the log-log line
    pub intercept: f64,
}

impl PowerLawFit {
    /// Predicted optimal K at population size m.
    #[must_use]
    pub fn predict(&self, m: f64) -> f64 {
        (self.intercept + self.exponent * m.ln()).exp()
    }
}

/// Fit `log k = exponent * log m + intercept` by least squares.
///
/// # Errors
///
/// Fails when the series differ in length, contain non-positive values, or
/// are too short or degenerate for a line fit.
pub fn fit_power_law(m: &[f64], k: &[f64]) -> Result<PowerLawFit> {
    if m.len() != k.len() {
        return Err(Error::LengthMismatch {
            left: m.len(),
            right: k.len(),
        });
    }
    if m.iter().chain(k).any(|&v| v <= 0.0) {
        return Err(Error::NonPositiveFit);
    }

    let log_m: Vec<f64> = m.iter().map(|v| v.ln()).collect();
    let log_k: Vec<f64> = k.iter().map(|v| v.ln()).collect();
    let fit = linear_fit(&log_m, &log_k)?;
    Ok(PowerLawFit {
        exponent: fit.slope,
        intercept: fit.intercept,
    })
}
