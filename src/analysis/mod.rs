//! Measurements over trained connectivity
//!
//! Post-training analogues of the analytical quantities: claw counts read
//! off a trained PN→KC matrix by thresholding, duplicate-averaged effective
//! connectivity, and the (population size, claw count) pairs that the
//! power-law fit compares against the simulation.

use std::fs;
use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::config::{load_config, CONFIG_FILE};
use crate::io::{WeightSnapshot, SNAPSHOT_FILE};
use crate::score::{group_memberships, GroupingMode};
use crate::Result;


/// Per-KC count of suprathreshold input weights.
///
/// `w_glo` is oriented PN rows × KC columns; a connection counts as a claw
/// when |w| exceeds the threshold.
#[must_use]
pub fn claw_counts(w_glo: &Array2<f32>, threshold: f32) -> Vec<usize> {
    w_glo
        .columns()
        .into_iter()
        .map(|col| col.iter().filter(|&&w| w.abs() > threshold).count())
        .collect()
}

/// Mean claw count over KCs with at least one claw.
///
/// Returns 0.0 when no KC crosses the threshold.
#[must_use]
pub fn mean_claw_count(w_glo: &Array2<f32>, threshold: f32) -> f64 {
    let counts = claw_counts(w_glo, threshold);
    let nonzero: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    if nonzero.is_empty() {
        return 0.0;
    }
    nonzero.iter().sum::<usize>() as f64 / nonzero.len() as f64
}

/// Collapse duplicated presynaptic rows by averaging copies.
///
/// Returns the (n_or × n_post) effective connectivity. Only the `Repeat` and
/// `Tile` layouts are supported.
pub fn average_duplicates(
    w: &Array2<f32>,
    n_or: usize,
    mode: GroupingMode,
) -> Result<Array2<f32>> {
    let memberships = group_memberships(w.nrows(), n_or, mode, None)?;
    let duplication = w.nrows() / n_or;

    let mut averaged = Array2::zeros((n_or, w.ncols()));
    for (row, &group) in memberships.iter().enumerate() {
        for col in 0..w.ncols() {
            averaged[[group, col]] += w[[row, col]] / duplication as f32;
        }
    }
    Ok(averaged)
}

/// Claw statistics of one trained model, keyed by its PN population size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationSparsity {
    pub n_pn: usize,
    pub mean_claw_count: f64,
}

/// Collect (population size, claw count) pairs from a sweep directory.
///
/// Each subdirectory of `root` must hold a `config.json` and a `model.json`;
/// directories missing either are skipped. Results are sorted by n_pn.
pub fn sparsity_from_training(root: &Path, threshold: f32) -> Result<Vec<PopulationSparsity>> {
    let mut results = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let dir = entry.path();
        if !dir.join(SNAPSHOT_FILE).exists() || !dir.join(CONFIG_FILE).exists() {
            continue;
        }
        let config = load_config(&dir)?;
        let snapshot = WeightSnapshot::load(&dir.join(SNAPSHOT_FILE))?;
        results.push(PopulationSparsity {
            n_pn: config.n_pn,
            mean_claw_count: mean_claw_count(&snapshot.w_glo()?, threshold),
        });
    }
    results.sort_by_key(|r| r.n_pn);
    Ok(results)
}
