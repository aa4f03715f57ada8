//! CLI command implementations

mod mask;
mod optimal_k;
mod oracle;
mod score;
mod sparsity;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command, LogLevel};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Score(args) => score::run_score(args, log_level),
        Command::Sparsity(args) => sparsity::run_sparsity(args, log_level),
        Command::Mask(args) => mask::run_mask(args, log_level),
        Command::OptimalK(args) => optimal_k::run_optimal_k(args, log_level),
        Command::Oracle(args) => oracle::run_oracle(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
