//! Optimal-k command: estimates per population size plus the power-law fit

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::logging::{log, LogLevel};
use crate::cli::OptimalKArgs;
use crate::io::scan_tables;
use crate::sparsity::{estimate_optimal_k, fit_power_law};

pub fn run_optimal_k(args: OptimalKArgs, level: LogLevel) -> Result<(), String> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let tables = scan_tables(&args.table_dir).map_err(|e| e.to_string())?;
    if tables.is_empty() {
        return Err(format!(
            "no sensitivity tables found under {}",
            args.table_dir.display()
        ));
    }

    let mut ms = Vec::with_capacity(tables.len());
    let mut ks = Vec::with_capacity(tables.len());
    for (m, curves) in &tables {
        let estimate =
            estimate_optimal_k(curves, args.resamples, &mut rng).map_err(|e| e.to_string())?;
        log(
            level,
            LogLevel::Normal,
            &format!(
                "m = {m}: optimal K = {:.2}, 95% CI [{:.2}, {:.2}] ({} instances)",
                estimate.optimal_k, estimate.ci_lower, estimate.ci_upper, estimate.n_curves
            ),
        );
        if level == LogLevel::Verbose {
            log(
                level,
                LogLevel::Verbose,
                &format!("  K range: {:?}", estimate.k_range),
            );
        }
        ms.push(*m as f64);
        ks.push(estimate.optimal_k);
    }

    if tables.len() >= 2 {
        let fit = fit_power_law(&ms, &ks).map_err(|e| e.to_string())?;
        log(
            level,
            LogLevel::Normal,
            &format!(
                "power law: log k = {:.3} log m + {:.3}",
                fit.exponent, fit.intercept
            ),
        );
    }
    Ok(())
}
