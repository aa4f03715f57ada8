//! Olfato: Connectivity Analysis Library
//!
//! Post-hoc analysis of sparse, structured connectivity in trained
//! olfactory-circuit models (receptors → ORNs → PNs → KCs → readout):
//!
//! - **Sparse masks**: fixed binary connectivity with an exact per-unit
//!   in-degree, plus a biologically-constrained grouped variant
//! - **Glomerular scoring**: how selectively each postsynaptic unit draws
//!   from a single receptor group
//! - **Optimal sparsity**: argmin-over-K estimates from simulated
//!   loss-sensitivity curves, with bootstrap confidence intervals and a
//!   power-law fit against population size
//! - **Oracle baseline**: a hand-constructed linear prototype-distance
//!   classifier evaluated under noise, dropout, and weight perturbation
//!
//! Weight matrices are `ndarray::Array2<f32>` oriented presynaptic rows ×
//! postsynaptic columns; scores and statistical estimates are `f64`.
//!
//! # Example
//!
//! ```
//! use olfato::mask::sparse_mask;
//! use olfato::score::{glo_score, GroupingMode};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mask = sparse_mask(50, 200, 7, &mut rng).unwrap();
//! let report = glo_score(&mask, 10, GroupingMode::Tile, None).unwrap();
//! assert!(report.mean >= 0.0 && report.mean <= 1.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
mod error;
pub mod io;
pub mod mask;
pub mod oracle;
pub mod score;
pub mod sparsity;
pub mod stats;

pub use error::{Error, Result};
