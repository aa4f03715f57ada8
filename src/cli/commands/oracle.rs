//! Oracle command: evaluate the prototype baseline on a labeled dataset

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::logging::{log, LogLevel};
use crate::cli::OracleArgs;
use crate::io::WeightSnapshot;
use crate::oracle::{EvalOptions, OracleClassifier};

pub fn run_oracle(args: OracleArgs, level: LogLevel) -> Result<(), String> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let prototypes = WeightSnapshot::load(&args.prototypes)
        .and_then(|s| s.matrix("prototype"))
        .map_err(|e| e.to_string())?;

    let data = WeightSnapshot::load(&args.data).map_err(|e| e.to_string())?;
    let val_x = data.matrix("val_x").map_err(|e| e.to_string())?;
    let val_y: Vec<usize> = data
        .vector("val_y")
        .map_err(|e| e.to_string())?
        .iter()
        .map(|&v| v as usize)
        .collect();

    let oracle = OracleClassifier::from_prototypes(&prototypes);
    let opts = EvalOptions {
        noise_std: args.noise,
        dropout_rate: args.dropout,
        alpha: args.alpha,
        weight_jitter: args.jitter.then_some((0.8, 1.2)),
    };

    let result = oracle
        .evaluate(&val_x, &val_y, &opts, &mut rng)
        .map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "oracle: loss {:.4}, accuracy {:.4} ({} classes, {} samples)",
            result.loss,
            result.accuracy,
            oracle.n_classes(),
            val_y.len()
        ),
    );
    Ok(())
}
