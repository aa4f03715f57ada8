//! Crate-level error type

use thiserror::Error;

/// Errors produced by the analysis routines
#[derive(Debug, Error)]
pub enum Error {
    #[error("mask requests {requested} connections per unit but only {available} sources exist")]
    MaskTooDense { requested: usize, available: usize },

    #[error("{n_pre} presynaptic units cannot be split into {n_or} equal receptor groups")]
    UnevenGroups { n_pre: usize, n_or: usize },

    #[error("weight matrix has {rows} rows, incompatible with {n_or} receptor groups")]
    GroupShape { rows: usize, n_or: usize },

    #[error("matrix grouping requires a receptor-to-presynaptic weight matrix")]
    MissingReceptorMatrix,

    #[error("receptor matrix is {rows}x{cols}, expected {n_or}x{n_pre}")]
    ReceptorMatrixShape {
        rows: usize,
        cols: usize,
        n_or: usize,
        n_pre: usize,
    },

    #[error("similarity score requires at least two duplicates per receptor, got {0}")]
    TooFewDuplicates(usize),

    #[error("sensitivity table is empty")]
    EmptyTable,

    #[error("sensitivity curve {index} is empty")]
    EmptyCurve { index: usize },

    #[error("sensitivity curve {index} has {k_len} K values but {s_len} sensitivity values")]
    CurveLengthMismatch {
        index: usize,
        k_len: usize,
        s_len: usize,
    },

    #[error("series have mismatched lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("regression needs at least two points, got {0}")]
    TooFewPoints(usize),

    #[error("regression inputs have zero variance")]
    DegenerateFit,

    #[error("power-law fit requires strictly positive values")]
    NonPositiveFit,

    #[error("dataset has {samples} samples but {labels} labels")]
    LabelMismatch { samples: usize, labels: usize },

    #[error("label {label} out of range for {n_class} classes")]
    LabelOutOfRange { label: usize, n_class: usize },

    #[error("dropout rate {0} must be in [0, 1)")]
    InvalidDropoutRate(f32),

    #[error("parameter '{0}' not found in snapshot")]
    MissingParameter(String),

    #[error("parameter '{name}' declares shape {shape:?} but holds {len} values")]
    ParameterShape {
        name: String,
        shape: Vec<usize>,
        len: usize,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for all analysis operations
pub type Result<T> = std::result::Result<T, Error>;
