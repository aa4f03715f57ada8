//! Glomerular score

use ndarray::Array2;

use crate::Result;

use super::{group_memberships, GroupingMode, ScoreReport};

/// Score how selectively each postsynaptic unit draws from one receptor group.
///
/// For every column of `w`, the absolute weight mass is accumulated per
/// receptor group and the unit's score is the fraction captured by the best
/// single group. A unit wired entirely to one group scores 1.0; mass spread
/// evenly over `g` groups scores `1/g`; every score lies in [0, 1]. Units
/// with an all-zero weight vector score 0.0 and are excluded from the mean.
///
/// `w_or` is only consulted in [`GroupingMode::Matrix`], where it defines
/// group membership by strongest receptor connection.
///
/// # Errors
///
/// Fails when the row count is incompatible with `n_or` under the chosen
/// mode, or when `Matrix` mode is missing its receptor matrix.
///
/// # Example
///
/// ```
/// use ndarray::Array2;
/// use olfato::score::{glo_score, GroupingMode};
///
/// // Two units over 2 receptors x 2 copies (tile layout). The first unit is
/// // confined to receptor 0, the second is spread evenly.
/// let w = Array2::from_shape_vec(
///     (4, 2),
///     vec![1.0, 0.5, 0.0, 0.5, 3.0, 0.5, 0.0, 0.5],
/// )
/// .unwrap();
/// let report = glo_score(&w, 2, GroupingMode::Tile, None).unwrap();
/// assert_eq!(report.per_unit, vec![1.0, 0.5]);
/// ```
pub fn glo_score(
    w: &Array2<f32>,
    n_or: usize,
    mode: GroupingMode,
    w_or: Option<&Array2<f32>>,
) -> Result<ScoreReport> {
    let memberships = group_memberships(w.nrows(), n_or, mode, w_or)?;

    let scored = w
        .columns()
        .into_iter()
        .map(|column| {
            let mut group_mass = vec![0.0f64; n_or];
            for (row, &weight) in column.iter().enumerate() {
                group_mass[memberships[row]] += f64::from(weight.abs());
            }
            let total: f64 = group_mass.iter().sum();
            if total == 0.0 {
                return None;
            }
            let best = group_mass.iter().cloned().fold(0.0, f64::max);
            Some(best / total)
        })
        .collect();

    Ok(ScoreReport::from_scored(scored))
}
