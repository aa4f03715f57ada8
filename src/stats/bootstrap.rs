//! Nonparametric bootstrap for the mean

use rand::Rng;

use super::mean;

/// Point estimate of a mean with a bootstrap percentile interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapCi {
    /// Sample mean of the original data
    pub mean: f64,
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
}

impl BootstrapCi {
    /// True when the interval has collapsed onto the point estimate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
}

/// Bootstrap confidence interval for the mean of `samples`.
///
/// Resamples `samples` with replacement `n_resamples` times, takes the mean
/// of each resample, and brackets the point estimate with the percentile
/// interval at the given confidence level (0.95 → 2.5th/97.5th percentiles).
/// The returned interval always contains the point estimate; with a single
/// sample it collapses onto it.
///
/// # Panics
///
/// Panics when `samples` is empty; callers validate their tables first.
///
/// # Example
///
/// ```
/// use olfato::stats::bootstrap_mean_ci;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let ci = bootstrap_mean_ci(&[4.0], 1000, 0.95, &mut rng);
/// assert_eq!(ci.mean, 4.0);
/// assert!(ci.is_degenerate());
/// ```
pub fn bootstrap_mean_ci<R: Rng + ?Sized>(
    samples: &[f64],
    n_resamples: usize,
    confidence: f64,
    rng: &mut R,
) -> BootstrapCi {
    assert!(!samples.is_empty(), "bootstrap requires at least one sample");

    let point = mean(samples);

    let mut resampled_means = Vec::with_capacity(n_resamples);
    for _ in 0..n_resamples {
        let total: f64 = (0..samples.len())
            .map(|_| samples[rng.random_range(0..samples.len())])
            .sum();
        resampled_means.push(total / samples.len() as f64);
    }

    let tail = (1.0 - confidence) / 2.0 * 100.0;
    let lower = percentile(&resampled_means, tail);
    let upper = percentile(&resampled_means, 100.0 - tail);

    // Percentile brackets are widened to the point estimate so the interval
    // is guaranteed to contain it.
    BootstrapCi {
        mean: point,
        lower: lower.min(point),
        upper: upper.max(point),
    }
}

/// Percentile with linear interpolation between order statistics.
///
/// `q` is on the 0–100 scale. Returns 0.0 for an empty slice.
pub fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let below = pos.floor() as usize;
    let above = pos.ceil() as usize;
    if below == above {
        return sorted[below];
    }
    let frac = pos - below as f64;
    sorted[below] * (1.0 - frac) + sorted[above] * frac
}
