//! Similarity score across duplicated receptor copies

use ndarray::Array2;

use crate::{Error, Result};

use super::{GroupingMode, ScoreReport};

/// Score how consistently each postsynaptic unit weights duplicate copies.
///
/// Each column's weights are arranged as (duplication × n_or): one row per
/// duplicated copy of the receptor array. The unit's score is the mean
/// pairwise cosine similarity of those copy rows: 1.0 when every copy of
/// the receptor array is weighted identically, near 0.0 when copies are
/// weighted independently. Copy rows with zero norm are skipped; units with
/// no valid pair score 0.0 and are excluded from the mean.
///
/// Only the `Repeat` and `Tile` layouts carry a copy structure; `Matrix`
/// grouping is rejected, as is a layout with a single copy per receptor.
pub fn sim_score(w: &Array2<f32>, n_or: usize, mode: GroupingMode) -> Result<ScoreReport> {
    if mode == GroupingMode::Matrix {
        return Err(Error::MissingReceptorMatrix);
    }
    if n_or == 0 || w.nrows() % n_or != 0 {
        return Err(Error::GroupShape {
            rows: w.nrows(),
            n_or,
        });
    }
    let duplication = w.nrows() / n_or;
    if duplication < 2 {
        return Err(Error::TooFewDuplicates(duplication));
    }

    let scored = w
        .columns()
        .into_iter()
        .map(|column| {
            // copies[d][g]: weight from copy d of receptor g to this unit
            let copies: Vec<Vec<f64>> = (0..duplication)
                .map(|d| {
                    (0..n_or)
                        .map(|g| {
                            let row = match mode {
                                GroupingMode::Repeat => g * duplication + d,
                                _ => g + d * n_or,
                            };
                            f64::from(column[row])
                        })
                        .collect()
                })
                .collect();

            let mut total = 0.0;
            let mut pairs = 0usize;
            for a in 0..duplication {
                for b in (a + 1)..duplication {
                    if let Some(cos) = cosine_similarity(&copies[a], &copies[b]) {
                        total += cos;
                        pairs += 1;
                    }
                }
            }
            if pairs == 0 {
                None
            } else {
                Some(total / pairs as f64)
            }
        })
        .collect();

    Ok(ScoreReport::from_scored(scored))
}

/// Cosine of the angle between two vectors, or None when either has zero norm.
fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a * norm_b))
}
