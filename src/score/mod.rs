//! Connectivity-quality scores for trained weight matrices
//!
//! Both scores read a weight matrix oriented presynaptic rows × postsynaptic
//! columns and need to know which rows are duplicated copies of the same
//! underlying receptor type. [`GroupingMode`] names the three layouts the
//! training side produces.

mod glo;
mod sim;

#[cfg(test)]
mod tests;

pub use glo::glo_score;
pub use sim::sim_score;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How duplicated presynaptic rows map back to receptor identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingMode {
    /// Consecutive duplicate blocks: row `r` belongs to group `r / duplication`.
    Repeat,
    /// Strided duplicates: row `r` belongs to group `r % n_or`.
    Tile,
    /// Membership by strongest connection in a receptor-to-presynaptic
    /// weight matrix of shape (n_or, n_pre).
    Matrix,
}

/// Per-unit scores together with their aggregate.
///
/// `per_unit` has one entry per postsynaptic column. Units whose incoming
/// weights are all zero score 0.0 and are excluded from `mean`; `n_scored`
/// counts the units that contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub mean: f64,
    pub per_unit: Vec<f64>,
    pub n_scored: usize,
}

impl ScoreReport {
    pub(crate) fn from_scored(scored: Vec<Option<f64>>) -> Self {
        let contributing: Vec<f64> = scored.iter().filter_map(|s| *s).collect();
        let mean = if contributing.is_empty() {
            0.0
        } else {
            contributing.iter().sum::<f64>() / contributing.len() as f64
        };
        ScoreReport {
            mean,
            per_unit: scored.into_iter().map(|s| s.unwrap_or(0.0)).collect(),
            n_scored: contributing.len(),
        }
    }
}

/// Resolve the receptor group of every presynaptic row.
pub(crate) fn group_memberships(
    n_pre: usize,
    n_or: usize,
    mode: GroupingMode,
    w_or: Option<&Array2<f32>>,
) -> Result<Vec<usize>> {
    if n_or == 0 {
        return Err(Error::GroupShape { rows: n_pre, n_or });
    }
    match mode {
        GroupingMode::Repeat | GroupingMode::Tile => {
            if n_pre % n_or != 0 {
                return Err(Error::GroupShape { rows: n_pre, n_or });
            }
            let duplication = n_pre / n_or;
            Ok((0..n_pre)
                .map(|row| match mode {
                    GroupingMode::Repeat => row / duplication,
                    _ => row % n_or,
                })
                .collect())
        }
        GroupingMode::Matrix => {
            let w_or = w_or.ok_or(Error::MissingReceptorMatrix)?;
            if w_or.nrows() != n_or || w_or.ncols() != n_pre {
                return Err(Error::ReceptorMatrixShape {
                    rows: w_or.nrows(),
                    cols: w_or.ncols(),
                    n_or,
                    n_pre,
                });
            }
            Ok((0..n_pre)
                .map(|row| {
                    let column = w_or.column(row);
                    let mut best = 0;
                    for (receptor, &value) in column.iter().enumerate() {
                        if value > column[best] {
                            best = receptor;
                        }
                    }
                    best
                })
                .collect())
        }
    }
}
