//! Configuration validation

use thiserror::Error;

use super::ExperimentConfig;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be nonzero")]
    ZeroDimension(&'static str),

    #[error("claw count {kc_inputs} exceeds the {n_pn} projection neurons")]
    InvalidClawCount { kc_inputs: usize, n_pn: usize },

    #[error("receptor duplication must be at least 1")]
    InvalidDuplication,

    #[error("invalid learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidLearningRate(f32),

    #[error("invalid KC dropout rate: {0} (must be in [0.0, 1.0))")]
    InvalidDropoutRate(f32),

    #[error("invalid ORN noise std: {0} (must be >= 0.0)")]
    InvalidNoiseStd(f32),

    #[error("invalid prune threshold: {0} (must be > 0.0 when pruning is on)")]
    InvalidPruneThreshold(f32),

    #[error("receptor_layer and replicate_orn_with_tiling are mutually exclusive")]
    ReceptorLayerConflict,

    #[error("direct_glo has no effect when skip_orn2pn is set")]
    DirectGloConflict,
}

/// Validate an experiment configuration.
///
/// Checks dimensions, rates, and option interactions; the first violation
/// is returned.
pub fn validate_config(config: &ExperimentConfig) -> Result<(), ValidationError> {
    if config.n_orn == 0 {
        return Err(ValidationError::ZeroDimension("n_orn"));
    }
    if config.n_pn == 0 {
        return Err(ValidationError::ZeroDimension("n_pn"));
    }
    if config.n_kc == 0 {
        return Err(ValidationError::ZeroDimension("n_kc"));
    }
    if config.n_class == 0 {
        return Err(ValidationError::ZeroDimension("n_class"));
    }
    if config.batch_size == 0 {
        return Err(ValidationError::ZeroDimension("batch_size"));
    }
    if config.max_epoch == 0 {
        return Err(ValidationError::ZeroDimension("max_epoch"));
    }

    if config.n_orn_duplication == 0 {
        return Err(ValidationError::InvalidDuplication);
    }

    if config.sparse_pn2kc && (config.kc_inputs == 0 || config.kc_inputs > config.n_pn) {
        return Err(ValidationError::InvalidClawCount {
            kc_inputs: config.kc_inputs,
            n_pn: config.n_pn,
        });
    }

    if config.lr <= 0.0 || config.lr > 1.0 {
        return Err(ValidationError::InvalidLearningRate(config.lr));
    }

    if config.kc_dropout && !(0.0..1.0).contains(&config.kc_dropout_rate) {
        return Err(ValidationError::InvalidDropoutRate(config.kc_dropout_rate));
    }

    if config.orn_noise_std < 0.0 {
        return Err(ValidationError::InvalidNoiseStd(config.orn_noise_std));
    }

    if config.kc_prune_weak_weights && config.kc_prune_threshold <= 0.0 {
        return Err(ValidationError::InvalidPruneThreshold(
            config.kc_prune_threshold,
        ));
    }

    if config.receptor_layer && config.replicate_orn_with_tiling {
        return Err(ValidationError::ReceptorLayerConflict);
    }

    if config.skip_orn2pn && config.direct_glo {
        return Err(ValidationError::DirectGloConflict);
    }

    Ok(())
}
