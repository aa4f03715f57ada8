//! Sparsity command: claw counts from a trained PN→KC matrix

use crate::analysis::{claw_counts, mean_claw_count};
use crate::cli::logging::{log, LogLevel};
use crate::cli::SparsityArgs;
use crate::io::WeightSnapshot;

pub fn run_sparsity(args: SparsityArgs, level: LogLevel) -> Result<(), String> {
    let snapshot = WeightSnapshot::load(&args.snapshot).map_err(|e| e.to_string())?;
    let w_glo = snapshot.matrix(&args.param).map_err(|e| e.to_string())?;

    let counts = claw_counts(&w_glo, args.threshold);
    let silent = counts.iter().filter(|&&c| c == 0).count();
    let max = counts.iter().copied().max().unwrap_or(0);

    log(
        level,
        LogLevel::Normal,
        &format!(
            "mean claw count: {:.2} (threshold {}, {} units, {} silent, max {})",
            mean_claw_count(&w_glo, args.threshold),
            args.threshold,
            counts.len(),
            silent,
            max
        ),
    );

    if level == LogLevel::Verbose {
        let mut histogram = vec![0usize; max + 1];
        for &c in &counts {
            histogram[c] += 1;
        }
        for (claws, &n) in histogram.iter().enumerate() {
            if n > 0 {
                log(level, LogLevel::Verbose, &format!("  {claws} claws: {n} units"));
            }
        }
    }
    Ok(())
}
