//! Validate command: check an experiment configuration

use std::fs;

use crate::cli::logging::{log, LogLevel};
use crate::cli::ValidateArgs;
use crate::config::{load_config, ExperimentConfig};

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let config: ExperimentConfig = if args.config.is_dir() {
        load_config(&args.config).map_err(|e| e.to_string())?
    } else {
        let content = fs::read_to_string(&args.config).map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())?
    };

    config.validate().map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "configuration valid: {} ORNs x{}, {} PNs, {} KCs, {} claws",
            config.n_orn, config.n_orn_duplication, config.n_pn, config.n_kc, config.kc_inputs
        ),
    );
    Ok(())
}
