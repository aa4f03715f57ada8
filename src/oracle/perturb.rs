//! Weight-space perturbation

use ndarray::Array2;
use rand::Rng;

use crate::stats::standard_normal;

/// How a weight matrix is displaced during robustness probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerturbMode {
    /// Each weight is scaled by an independent U(1−m, 1+m) factor.
    Multiplicative,
    /// The matrix moves along a random direction whose per-column norm
    /// matches the weight's per-column norm.
    FeatureNorm,
}

/// Draw a normalized random direction for a weight matrix.
///
/// The direction is gaussian, rescaled column by column so that each
/// column's norm equals the corresponding weight column's norm. The weight
/// must be oriented presynaptic rows × postsynaptic columns.
pub fn random_direction<R: Rng + ?Sized>(weight: &Array2<f32>, rng: &mut R) -> Array2<f32> {
    let mut direction = Array2::from_shape_fn(weight.dim(), |_| standard_normal(rng) as f32);
    for (mut d_col, w_col) in direction
        .columns_mut()
        .into_iter()
        .zip(weight.columns().into_iter())
    {
        let d_norm = d_col.iter().map(|v| v * v).sum::<f32>().sqrt();
        let w_norm = w_col.iter().map(|v| v * v).sum::<f32>().sqrt();
        if d_norm > 0.0 {
            let scale = w_norm / d_norm;
            d_col.mapv_inplace(|v| v * scale);
        }
    }
    direction
}

/// Produce a perturbed copy of a weight matrix.
pub fn perturbed<R: Rng + ?Sized>(
    weight: &Array2<f32>,
    mode: PerturbMode,
    magnitude: f32,
    rng: &mut R,
) -> Array2<f32> {
    match mode {
        PerturbMode::Multiplicative => {
            if magnitude == 0.0 {
                return weight.clone();
            }
            weight.mapv(|w| w * rng.random_range(1.0 - magnitude..1.0 + magnitude))
        }
        PerturbMode::FeatureNorm => {
            let direction = random_direction(weight, rng);
            weight + &direction.mapv(|v| v * magnitude)
        }
    }
}
