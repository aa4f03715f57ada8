//! Score command: glomerular and similarity scores of a snapshot

use crate::cli::logging::{log, LogLevel};
use crate::cli::{ModeArg, ScoreArgs};
use crate::io::WeightSnapshot;
use crate::score::{glo_score, sim_score, GroupingMode};

pub fn run_score(args: ScoreArgs, level: LogLevel) -> Result<(), String> {
    let snapshot = WeightSnapshot::load(&args.snapshot).map_err(|e| e.to_string())?;
    let w = snapshot.matrix(&args.param).map_err(|e| e.to_string())?;
    let mode = GroupingMode::from(args.mode);

    let w_or = if args.mode == ModeArg::Matrix {
        Some(
            snapshot
                .matrix(&args.receptor_param)
                .map_err(|e| e.to_string())?,
        )
    } else {
        None
    };

    let report = glo_score(&w, args.groups, mode, w_or.as_ref()).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "glo score: {:.4} ({} of {} units scored)",
            report.mean,
            report.n_scored,
            report.per_unit.len()
        ),
    );
    if level == LogLevel::Verbose {
        for (unit, score) in report.per_unit.iter().enumerate() {
            log(level, LogLevel::Verbose, &format!("  unit {unit}: {score:.4}"));
        }
    }

    if args.sim {
        let report = sim_score(&w, args.groups, mode).map_err(|e| e.to_string())?;
        log(
            level,
            LogLevel::Normal,
            &format!(
                "sim score: {:.4} ({} of {} units scored)",
                report.mean,
                report.n_scored,
                report.per_unit.len()
            ),
        );
    }
    Ok(())
}
