//! Typed experiment configuration
//!
//! The training side records one `config.json` per model directory; the
//! analysis routines read it back to recover layer sizes, duplication
//! factors, and claw counts. Every recognized option is an explicit field
//! with an explicit default; there is no free-form attribute access, and
//! loading happens only through [`load_config`] with an explicit path.

mod validate;


pub use validate::{validate_config, ValidationError};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name used for configs inside a model directory.
pub const CONFIG_FILE: &str = "config.json";

/// Pre-activation normalization choice for a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    #[default]
    None,
    BatchNorm,
    LayerNorm,
}

/// Input noise model applied to ORN activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseModel {
    #[default]
    Additive,
    Multiplicative,
    None,
}

/// Label encoding of the classification targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelType {
    #[default]
    OneHot,
    Sparse,
    Combinatorial,
    MultiHeadSparse,
}

/// Full experiment configuration with the standard-model defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Number of distinct olfactory receptor types
    pub n_orn: usize,
    /// Duplicated copies per receptor type
    pub n_orn_duplication: usize,
    /// Projection neurons
    pub n_pn: usize,
    /// Kenyon cells
    pub n_kc: usize,
    /// Odor classes
    pub n_class: usize,
    /// Claw count: presynaptic connections per KC under the sparse mask
    pub kc_inputs: usize,

    /// Whether PN→KC connectivity is masked sparse
    pub sparse_pn2kc: bool,
    /// Whether PN→KC weights are trainable
    pub train_pn2kc: bool,
    /// Whether the KC bias is trainable
    pub train_kc_bias: bool,

    /// Replicate receptors by tiling the input
    pub replicate_orn_with_tiling: bool,
    /// Insert a trainable receptor→ORN layer instead of tiling
    pub receptor_layer: bool,
    /// Bypass the ORN→PN layer
    pub skip_orn2pn: bool,
    /// Bypass the PN→KC layer
    pub skip_pn2kc: bool,
    /// Initialize ORN→PN with identity-like glomerular connectivity
    pub direct_glo: bool,

    pub sign_constraint_orn2pn: bool,
    pub sign_constraint_pn2kc: bool,

    pub pn_norm_pre: Normalization,
    pub kc_norm_pre: Normalization,

    pub noise_model: NoiseModel,
    pub orn_noise_std: f32,

    pub kc_dropout: bool,
    pub kc_dropout_rate: f32,

    /// Zero out sub-threshold PN→KC weights after training
    pub kc_prune_weak_weights: bool,
    pub kc_prune_threshold: f32,

    pub label_type: LabelType,

    pub lr: f32,
    pub max_epoch: usize,
    pub batch_size: usize,
    pub save_every_epoch: bool,

    pub data_dir: PathBuf,
    pub save_path: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            n_orn: 50,
            n_orn_duplication: 10,
            n_pn: 50,
            n_kc: 2500,
            n_class: 100,
            kc_inputs: 7,
            sparse_pn2kc: true,
            train_pn2kc: false,
            train_kc_bias: true,
            replicate_orn_with_tiling: true,
            receptor_layer: false,
            skip_orn2pn: false,
            skip_pn2kc: false,
            direct_glo: false,
            sign_constraint_orn2pn: true,
            sign_constraint_pn2kc: true,
            pn_norm_pre: Normalization::None,
            kc_norm_pre: Normalization::None,
            noise_model: NoiseModel::Additive,
            orn_noise_std: 0.0,
            kc_dropout: true,
            kc_dropout_rate: 0.5,
            kc_prune_weak_weights: false,
            kc_prune_threshold: 0.05,
            label_type: LabelType::OneHot,
            lr: 1e-3,
            max_epoch: 10,
            batch_size: 256,
            save_every_epoch: false,
            data_dir: PathBuf::from("./datasets/proto/standard"),
            save_path: PathBuf::from("./files/standard"),
        }
    }
}

impl ExperimentConfig {
    /// Total presynaptic units feeding the PN layer.
    #[must_use]
    pub fn n_orn_total(&self) -> usize {
        self.n_orn * self.n_orn_duplication
    }

    /// Validate every field; see [`ValidationError`] for the checks.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_config(self)
    }
}

/// Write `config.json` into a model directory, creating it if needed.
pub fn save_config(config: &ExperimentConfig, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| Error::Serialization(format!("config serialization failed: {e}")))?;
    fs::write(dir.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Read `config.json` from a model directory.
pub fn load_config(dir: &Path) -> Result<ExperimentConfig> {
    let content = fs::read_to_string(dir.join(CONFIG_FILE))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Serialization(format!("config deserialization failed: {e}")))
}
