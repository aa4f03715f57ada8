//! Sparse connectivity mask generation
//!
//! A mask is a fixed 0/1 matrix of shape (n_pre, n_post) marking which
//! connections are permitted to be nonzero. It is generated once at model
//! build time and held fixed for the lifetime of a training run; here it is
//! also the synthetic ground truth against which glomerular scoring is
//! exercised.
//!
//! Two generators are provided:
//!
//! - [`sparse_mask`]: each postsynaptic unit draws exactly `non` presynaptic
//!   sources uniformly without replacement, independently per unit.
//! - [`grouped_sparse_mask`]: presynaptic units are duplicated copies of
//!   `n_or` receptor types (tile layout); each postsynaptic unit first draws
//!   one candidate copy per receptor, then keeps `non` of them, so no unit
//!   ever receives two copies of the same receptor.

use ndarray::Array2;
use rand::seq::index;
use rand::Rng;

use crate::{Error, Result};


/// Generate a binary mask with exactly `non` active sources per column.
///
/// Column draws are independent: randomness is uniform without replacement
/// within a column, with no global balancing across rows.
///
/// # Errors
///
/// Fails when `non > n_pre`.
///
/// # Example
///
/// ```
/// use olfato::mask::sparse_mask;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let mask = sparse_mask(50, 2500, 7, &mut rng).unwrap();
/// assert_eq!(mask.column(0).iter().filter(|&&v| v == 1.0).count(), 7);
/// ```
pub fn sparse_mask<R: Rng + ?Sized>(
    n_pre: usize,
    n_post: usize,
    non: usize,
    rng: &mut R,
) -> Result<Array2<f32>> {
    if non > n_pre {
        return Err(Error::MaskTooDense {
            requested: non,
            available: n_pre,
        });
    }

    let mut mask = Array2::zeros((n_pre, n_post));
    for col in 0..n_post {
        for row in index::sample(rng, n_pre, non).iter() {
            mask[[row, col]] = 1.0;
        }
    }
    Ok(mask)
}

/// Generate a mask that forbids duplicate-receptor inputs to a unit.
///
/// The `n_pre` rows are interpreted as `n_pre / n_or` duplicated copies of
/// `n_or` receptor types in tile layout: copy `d` of receptor `i` sits at row
/// `i + d * n_or`. For each column, one copy is drawn per receptor and `non`
/// of those candidates are kept, so the active rows of any column map to
/// `non` distinct receptors.
///
/// # Errors
///
/// Fails when `n_or` is zero or does not divide `n_pre`, or when
/// `non > n_or`.
pub fn grouped_sparse_mask<R: Rng + ?Sized>(
    n_pre: usize,
    n_post: usize,
    non: usize,
    n_or: usize,
    rng: &mut R,
) -> Result<Array2<f32>> {
    if n_or == 0 || n_pre % n_or != 0 {
        return Err(Error::UnevenGroups { n_pre, n_or });
    }
    if non > n_or {
        return Err(Error::MaskTooDense {
            requested: non,
            available: n_or,
        });
    }

    let duplication = n_pre / n_or;
    let mut mask = Array2::zeros((n_pre, n_post));
    for col in 0..n_post {
        for receptor in index::sample(rng, n_or, non).iter() {
            let copy = rng.random_range(0..duplication);
            mask[[receptor + copy * n_or, col]] = 1.0;
        }
    }
    Ok(mask)
}
