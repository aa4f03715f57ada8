//! CLI module for olfato
//!
//! This module contains the argument definitions, command handlers, and
//! output utilities behind the `olfato` binary.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::score::GroupingMode;

/// Olfato: Connectivity Analysis for Olfactory Circuit Models
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "olfato")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Sparse masks, glomerular scoring, optimal-sparsity estimation, and oracle baselines")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Score connectivity concentration of a weight snapshot
    Score(ScoreArgs),

    /// Report claw counts of a trained PN→KC matrix
    Sparsity(SparsityArgs),

    /// Generate a sparse connectivity mask
    Mask(MaskArgs),

    /// Estimate the optimal claw count from simulated sensitivity tables
    OptimalK(OptimalKArgs),

    /// Evaluate the linear prototype oracle on a labeled dataset
    Oracle(OracleArgs),

    /// Validate an experiment configuration file
    Validate(ValidateArgs),
}

/// Row-to-receptor grouping layout (CLI spelling of [`GroupingMode`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Repeat,
    Tile,
    Matrix,
}

impl From<ModeArg> for GroupingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Repeat => GroupingMode::Repeat,
            ModeArg::Tile => GroupingMode::Tile,
            ModeArg::Matrix => GroupingMode::Matrix,
        }
    }
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Path to a weight snapshot (model.json)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Number of distinct receptor types
    #[arg(short = 'g', long)]
    pub groups: usize,

    /// Parameter to score
    #[arg(short, long, default_value = "w_orn")]
    pub param: String,

    /// Duplicate-row layout
    #[arg(short, long, value_enum, default_value = "tile")]
    pub mode: ModeArg,

    /// Receptor matrix parameter consulted in matrix mode
    #[arg(long, default_value = "w_or")]
    pub receptor_param: String,

    /// Also compute the duplicate-similarity score
    #[arg(long)]
    pub sim: bool,
}

/// Arguments for the sparsity command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SparsityArgs {
    /// Path to a weight snapshot (model.json)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Parameter holding the PN→KC weights
    #[arg(short, long, default_value = "w_glo")]
    pub param: String,

    /// Claw detection threshold on |w|
    #[arg(short, long, default_value_t = 0.05)]
    pub threshold: f32,
}

/// Arguments for the mask command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct MaskArgs {
    /// Presynaptic population size
    #[arg(value_name = "N_PRE")]
    pub n_pre: usize,

    /// Postsynaptic population size
    #[arg(value_name = "N_POST")]
    pub n_post: usize,

    /// Connections per postsynaptic unit
    #[arg(value_name = "NON")]
    pub non: usize,

    /// Forbid duplicate-receptor inputs, with this many receptor groups
    #[arg(short, long)]
    pub groups: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the mask to this snapshot file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the optimal-k command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct OptimalKArgs {
    /// Directory of sensitivity_m{m}.json tables
    #[arg(value_name = "TABLE_DIR")]
    pub table_dir: PathBuf,

    /// Bootstrap resamples
    #[arg(short, long, default_value_t = crate::sparsity::DEFAULT_RESAMPLES)]
    pub resamples: usize,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the oracle command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct OracleArgs {
    /// Snapshot holding the class prototypes under "prototype"
    #[arg(value_name = "PROTOTYPES")]
    pub prototypes: PathBuf,

    /// Snapshot holding "val_x" (matrix) and "val_y" (labels)
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Logit scale
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f32,

    /// Additive input noise std
    #[arg(long, default_value_t = 0.0)]
    pub noise: f32,

    /// Input dropout rate
    #[arg(long, default_value_t = 0.0)]
    pub dropout: f32,

    /// Apply the U(0.8, 1.2) multiplicative weight jitter
    #[arg(long)]
    pub jitter: bool,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Directory holding config.json, or the file itself
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}
