//! Olfato CLI
//!
//! Connectivity-analysis entry point for the olfato library.
//!
//! # Usage
//!
//! ```bash
//! # Glomerular score of a trained snapshot
//! olfato score files/standard/model.json --groups 50 --mode tile
//!
//! # Claw counts of the PN→KC matrix
//! olfato sparsity files/standard/model.json --threshold 0.05
//!
//! # Generate a biologically-constrained mask
//! olfato mask 500 2500 7 --groups 50 --seed 1 -o mask.json
//!
//! # Optimal claw count across population sizes
//! olfato optimal-k files/analytical --resamples 1000
//!
//! # Oracle baseline on a labeled dataset
//! olfato oracle prototypes.json data.json --alpha 8
//!
//! # Validate a config
//! olfato validate files/standard
//! ```

use clap::Parser;
use olfato::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
