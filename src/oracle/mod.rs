//! Linear prototype-distance oracle
//!
//! A hand-constructed (non-learned) classifier used as a performance
//! baseline: for class prototypes P, the readout `argmax(x·W + b)` with
//! `W = 2·Pᵀ` and `b = −diag(P·Pᵀ)` selects the nearest prototype in
//! squared euclidean distance. Evaluation applies the same degradations the
//! trained networks are probed with: additive input noise, input dropout,
//! logit scaling, multiplicative weight jitter, and norm-preserving weight
//! perturbation along random directions.

mod perturb;


pub use perturb::{perturbed, random_direction, PerturbMode};

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::stats::standard_normal;
use crate::{Error, Result};

/// Degradations applied during an evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalOptions {
    /// Std of additive gaussian noise on the inputs
    pub noise_std: f32,
    /// Input dropout rate in [0, 1); surviving inputs are rescaled
    pub dropout_rate: f32,
    /// Logit scale applied before the softmax
    pub alpha: f32,
    /// Uniform multiplicative jitter range on the weights, e.g. (0.8, 1.2)
    pub weight_jitter: Option<(f32, f32)>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            noise_std: 0.0,
            dropout_rate: 0.0,
            alpha: 1.0,
            weight_jitter: None,
        }
    }
}

/// Loss and accuracy of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Mean softmax cross-entropy
    pub loss: f64,
    /// Fraction of correct argmax predictions
    pub accuracy: f64,
}

/// Nearest-prototype linear classifier.
#[derive(Debug, Clone)]
pub struct OracleClassifier {
    /// Readout weights, shape (n_feature, n_class)
    pub weights: Array2<f32>,
    /// Readout biases, length n_class
    pub biases: Array1<f32>,
}

impl OracleClassifier {
    /// Build the oracle from class prototypes of shape (n_class, n_feature).
    ///
    /// # Example
    ///
    /// ```
    /// use ndarray::{array, Array2};
    /// use olfato::oracle::{EvalOptions, OracleClassifier};
    /// use rand::SeedableRng;
    ///
    /// let prototypes = array![[1.0f32, 0.0], [0.0, 1.0]];
    /// let oracle = OracleClassifier::from_prototypes(&prototypes);
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    /// let result = oracle
    ///     .evaluate(&prototypes, &[0, 1], &EvalOptions::default(), &mut rng)
    ///     .unwrap();
    /// assert_eq!(result.accuracy, 1.0);
    /// ```
    #[must_use]
    pub fn from_prototypes(prototypes: &Array2<f32>) -> Self {
        let weights = prototypes.t().mapv(|v| 2.0 * v);
        let gram = prototypes.dot(&prototypes.t());
        let biases = gram.diag().mapv(|v| -v);
        OracleClassifier { weights, biases }
    }

    /// Number of classes the oracle discriminates.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.biases.len()
    }

    /// Raw readout logits for a batch of shape (n_sample, n_feature).
    #[must_use]
    pub fn logits(&self, x: &Array2<f32>) -> Array2<f32> {
        x.dot(&self.weights) + &self.biases
    }

    /// Evaluate loss and accuracy on labeled data under the given options.
    ///
    /// # Errors
    ///
    /// Fails on sample/label count mismatch, an out-of-range label, a
    /// feature-dimension mismatch, or a dropout rate outside [0, 1).
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        x: &Array2<f32>,
        y: &[usize],
        opts: &EvalOptions,
        rng: &mut R,
    ) -> Result<Evaluation> {
        if x.nrows() != y.len() {
            return Err(Error::LabelMismatch {
                samples: x.nrows(),
                labels: y.len(),
            });
        }
        if x.ncols() != self.weights.nrows() {
            return Err(Error::LengthMismatch {
                left: x.ncols(),
                right: self.weights.nrows(),
            });
        }
        if !(0.0..1.0).contains(&opts.dropout_rate) {
            return Err(Error::InvalidDropoutRate(opts.dropout_rate));
        }
        let n_class = self.n_classes();
        if let Some(&label) = y.iter().find(|&&label| label >= n_class) {
            return Err(Error::LabelOutOfRange { label, n_class });
        }

        let mut data = x.clone();
        if opts.noise_std > 0.0 {
            data.mapv_inplace(|v| v + standard_normal(rng) as f32 * opts.noise_std);
        }
        if opts.dropout_rate > 0.0 {
            let keep_scale = 1.0 / (1.0 - opts.dropout_rate);
            data.mapv_inplace(|v| {
                if rng.random::<f32>() < opts.dropout_rate {
                    0.0
                } else {
                    v * keep_scale
                }
            });
        }

        let mut logits = match opts.weight_jitter {
            Some((lo, hi)) => {
                let jittered = self.weights.mapv(|w| w * rng.random_range(lo..hi));
                data.dot(&jittered) + &self.biases
            }
            None => self.logits(&data),
        };
        logits.mapv_inplace(|v| v * opts.alpha);

        let probs = softmax_rows(&logits);
        let mut loss = 0.0;
        let mut hits = 0usize;
        for (i, &label) in y.iter().enumerate() {
            let row = probs.row(i);
            loss -= f64::from(row[label].max(f32::MIN_POSITIVE)).ln();
            let predicted = row
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(j, _)| j)
                .unwrap_or(0);
            if predicted == label {
                hits += 1;
            }
        }

        Ok(Evaluation {
            loss: loss / y.len().max(1) as f64,
            accuracy: hits as f64 / y.len().max(1) as f64,
        })
    }

    /// Evaluate across a range of logit scales.
    pub fn sweep_alpha<R: Rng + ?Sized>(
        &self,
        x: &Array2<f32>,
        y: &[usize],
        alphas: &[f32],
        base: &EvalOptions,
        rng: &mut R,
    ) -> Result<Vec<Evaluation>> {
        alphas
            .iter()
            .map(|&alpha| self.evaluate(x, y, &EvalOptions { alpha, ..*base }, rng))
            .collect()
    }

    /// Evaluate across a range of input noise levels.
    pub fn sweep_noise<R: Rng + ?Sized>(
        &self,
        x: &Array2<f32>,
        y: &[usize],
        noise_stds: &[f32],
        base: &EvalOptions,
        rng: &mut R,
    ) -> Result<Vec<Evaluation>> {
        noise_stds
            .iter()
            .map(|&noise_std| self.evaluate(x, y, &EvalOptions { noise_std, ..*base }, rng))
            .collect()
    }

    /// Evaluate across a range of input dropout rates.
    pub fn sweep_dropout<R: Rng + ?Sized>(
        &self,
        x: &Array2<f32>,
        y: &[usize],
        rates: &[f32],
        base: &EvalOptions,
        rng: &mut R,
    ) -> Result<Vec<Evaluation>> {
        rates
            .iter()
            .map(|&dropout_rate| {
                self.evaluate(
                    x,
                    y,
                    &EvalOptions {
                        dropout_rate,
                        ..*base
                    },
                    rng,
                )
            })
            .collect()
    }

    /// Evaluate over the noise × alpha grid; result is indexed [noise][alpha].
    pub fn sweep_noise_alpha<R: Rng + ?Sized>(
        &self,
        x: &Array2<f32>,
        y: &[usize],
        noise_stds: &[f32],
        alphas: &[f32],
        base: &EvalOptions,
        rng: &mut R,
    ) -> Result<Vec<Vec<Evaluation>>> {
        noise_stds
            .iter()
            .map(|&noise_std| {
                self.sweep_alpha(x, y, alphas, &EvalOptions { noise_std, ..*base }, rng)
            })
            .collect()
    }

    /// Evaluate under readout-weight perturbation of increasing magnitude.
    ///
    /// For each of `n_reps` repetitions a perturbation is drawn (one random
    /// direction per repetition in `FeatureNorm` mode, fresh multiplicative
    /// jitter per magnitude otherwise) and the classifier is evaluated at
    /// every magnitude; results are averaged across repetitions.
    ///
    /// # Panics
    ///
    /// Panics when `n_reps` is zero.
    pub fn evaluate_perturbed<R: Rng + ?Sized>(
        &self,
        x: &Array2<f32>,
        y: &[usize],
        mode: PerturbMode,
        magnitudes: &[f32],
        n_reps: usize,
        opts: &EvalOptions,
        rng: &mut R,
    ) -> Result<Vec<Evaluation>> {
        assert!(n_reps > 0, "perturbation needs at least one repetition");

        let mut totals = vec![
            Evaluation {
                loss: 0.0,
                accuracy: 0.0,
            };
            magnitudes.len()
        ];
        for _ in 0..n_reps {
            let direction = match mode {
                PerturbMode::FeatureNorm => Some(random_direction(&self.weights, rng)),
                PerturbMode::Multiplicative => None,
            };
            for (slot, &magnitude) in totals.iter_mut().zip(magnitudes) {
                let weights = match (&direction, mode) {
                    (Some(d), _) => &self.weights + &d.mapv(|v| v * magnitude),
                    (None, _) => perturbed(&self.weights, mode, magnitude, rng),
                };
                let probe = OracleClassifier {
                    weights,
                    biases: self.biases.clone(),
                };
                let result = probe.evaluate(x, y, opts, rng)?;
                slot.loss += result.loss;
                slot.accuracy += result.accuracy;
            }
        }

        for slot in &mut totals {
            slot.loss /= n_reps as f64;
            slot.accuracy /= n_reps as f64;
        }
        Ok(totals)
    }
}

/// Row-wise softmax.
fn softmax_rows(logits: &Array2<f32>) -> Array2<f32> {
    let mut result = logits.clone();
    for mut row in result.rows_mut() {
        let max_val = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        row.mapv_inplace(|v| (v - max_val).exp());
        let sum: f32 = row.iter().sum();
        if sum > 0.0 {
            row.mapv_inplace(|v| v / sum);
        }
    }
    result
}
