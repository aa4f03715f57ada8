use approx::assert_relative_eq;
use ndarray::{Array2, Axis};

use super::*;
use crate::Error;

/// 4 presynaptic rows as 2 receptors x 2 copies, 3 postsynaptic units.
/// Tile layout: rows [r0c0, r1c0, r0c1, r1c1].
fn tile_matrix() -> Array2<f32> {
    Array2::from_shape_vec(
        (4, 3),
        vec![
            2.0, 1.0, 0.0, // r0 copy0
            0.0, 1.0, 0.0, // r1 copy0
            1.0, 1.0, 0.0, // r0 copy1
            0.0, 1.0, 0.0, // r1 copy1
        ],
    )
    .unwrap()
}

#[test]
fn test_glo_score_concentrated_unit_scores_one() {
    let report = glo_score(&tile_matrix(), 2, GroupingMode::Tile, None).unwrap();
    assert_relative_eq!(report.per_unit[0], 1.0);
}

#[test]
fn test_glo_score_even_spread_scores_inverse_group_count() {
    let report = glo_score(&tile_matrix(), 2, GroupingMode::Tile, None).unwrap();
    assert_relative_eq!(report.per_unit[1], 0.5);
}

#[test]
fn test_glo_score_zero_unit_excluded_from_mean() {
    let report = glo_score(&tile_matrix(), 2, GroupingMode::Tile, None).unwrap();
    assert_eq!(report.per_unit[2], 0.0);
    assert_eq!(report.n_scored, 2);
    assert_relative_eq!(report.mean, 0.75);
}

#[test]
fn test_glo_score_all_zero_matrix_mean_zero() {
    let w = Array2::zeros((4, 3));
    let report = glo_score(&w, 2, GroupingMode::Tile, None).unwrap();
    assert_eq!(report.mean, 0.0);
    assert_eq!(report.n_scored, 0);
}

#[test]
fn test_glo_score_repeat_layout() {
    // Repeat layout: rows [r0c0, r0c1, r1c0, r1c1]. A unit reading both
    // copies of receptor 0 is still fully concentrated.
    let w = Array2::from_shape_vec((4, 1), vec![1.0, 2.0, 0.0, 0.0]).unwrap();
    let report = glo_score(&w, 2, GroupingMode::Repeat, None).unwrap();
    assert_relative_eq!(report.per_unit[0], 1.0);
}

#[test]
fn test_glo_score_uses_absolute_mass() {
    let w = Array2::from_shape_vec((4, 1), vec![-1.0, 0.0, -1.0, 0.0]).unwrap();
    let report = glo_score(&w, 2, GroupingMode::Tile, None).unwrap();
    assert_relative_eq!(report.per_unit[0], 1.0);
}

#[test]
fn test_glo_score_matrix_mode_membership_by_strongest() {
    // Receptor matrix: rows 0 and 2 belong to receptor 0, rows 1 and 3 to
    // receptor 1, defined by strongest connection rather than position.
    let w_or = Array2::from_shape_vec(
        (2, 4),
        vec![
            0.9, 0.1, 0.8, 0.2, // receptor 0
            0.1, 0.9, 0.2, 0.8, // receptor 1
        ],
    )
    .unwrap();
    let w = Array2::from_shape_vec((4, 1), vec![1.0, 0.0, 1.0, 0.0]).unwrap();
    let report = glo_score(&w, 2, GroupingMode::Matrix, Some(&w_or)).unwrap();
    assert_relative_eq!(report.per_unit[0], 1.0);
}

#[test]
fn test_glo_score_matrix_mode_requires_receptor_matrix() {
    let err = glo_score(&tile_matrix(), 2, GroupingMode::Matrix, None).unwrap_err();
    assert!(matches!(err, Error::MissingReceptorMatrix));
}

#[test]
fn test_glo_score_rejects_uneven_rows() {
    let w = Array2::zeros((5, 2));
    assert!(matches!(
        glo_score(&w, 2, GroupingMode::Tile, None),
        Err(Error::GroupShape { rows: 5, n_or: 2 })
    ));
}

#[test]
fn test_glo_score_column_permutation_invariant() {
    let w = tile_matrix();
    let mut permuted = w.clone();
    // swap columns 0 and 1
    let c0 = w.index_axis(Axis(1), 0).to_owned();
    let c1 = w.index_axis(Axis(1), 1).to_owned();
    permuted.index_axis_mut(Axis(1), 0).assign(&c1);
    permuted.index_axis_mut(Axis(1), 1).assign(&c0);

    let a = glo_score(&w, 2, GroupingMode::Tile, None).unwrap();
    let b = glo_score(&permuted, 2, GroupingMode::Tile, None).unwrap();
    assert_relative_eq!(a.mean, b.mean);
    assert_relative_eq!(a.per_unit[0], b.per_unit[1]);
    assert_relative_eq!(a.per_unit[1], b.per_unit[0]);
}

#[test]
fn test_sim_score_identical_copies() {
    // Both copies of the receptor array weighted identically.
    let w = Array2::from_shape_vec((4, 1), vec![0.3, 0.7, 0.3, 0.7]).unwrap();
    let report = sim_score(&w, 2, GroupingMode::Tile).unwrap();
    assert_relative_eq!(report.per_unit[0], 1.0, epsilon = 1e-12);
}

#[test]
fn test_sim_score_orthogonal_copies() {
    // Copy 0 reads receptor 0, copy 1 reads receptor 1: orthogonal profiles.
    let w = Array2::from_shape_vec((4, 1), vec![1.0, 0.0, 0.0, 1.0]).unwrap();
    let report = sim_score(&w, 2, GroupingMode::Tile).unwrap();
    assert_relative_eq!(report.per_unit[0], 0.0, epsilon = 1e-12);
}

#[test]
fn test_sim_score_zero_unit_excluded() {
    let w = Array2::from_shape_vec((4, 2), vec![0.3, 0.0, 0.7, 0.0, 0.3, 0.0, 0.7, 0.0]).unwrap();
    let report = sim_score(&w, 2, GroupingMode::Tile).unwrap();
    assert_eq!(report.n_scored, 1);
    assert_eq!(report.per_unit[1], 0.0);
}

#[test]
fn test_sim_score_rejects_single_copy() {
    let w = Array2::zeros((2, 3));
    assert!(matches!(
        sim_score(&w, 2, GroupingMode::Tile),
        Err(Error::TooFewDuplicates(1))
    ));
}

#[test]
fn test_sim_score_rejects_matrix_mode() {
    let w = Array2::zeros((4, 3));
    assert!(sim_score(&w, 2, GroupingMode::Matrix).is_err());
}

mod proptests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    proptest! {
        #[test]
        fn glo_score_bounded_for_nonzero_units(
            n_or in 1usize..10,
            duplication in 1usize..5,
            n_post in 1usize..12,
            seed in 0u64..1000,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let n_pre = n_or * duplication;
            let w = Array2::from_shape_fn((n_pre, n_post), |_| {
                rng.random::<f32>() * 2.0 - 1.0
            });
            let report = glo_score(&w, n_or, GroupingMode::Tile, None).unwrap();
            for (unit, &score) in report.per_unit.iter().enumerate() {
                prop_assert!(
                    (0.0..=1.0).contains(&score),
                    "unit {} scored {}",
                    unit,
                    score
                );
                // With one group, every nonzero unit is fully concentrated.
                if n_or == 1 {
                    prop_assert!(score == 1.0 || score == 0.0);
                }
            }
            prop_assert!(report.mean.is_finite());
        }
    }
}
