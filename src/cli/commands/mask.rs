//! Mask command: generate and optionally save a connectivity mask

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::logging::{log, LogLevel};
use crate::cli::MaskArgs;
use crate::io::WeightSnapshot;
use crate::mask::{grouped_sparse_mask, sparse_mask};

pub fn run_mask(args: MaskArgs, level: LogLevel) -> Result<(), String> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mask = match args.groups {
        Some(n_or) => grouped_sparse_mask(args.n_pre, args.n_post, args.non, n_or, &mut rng),
        None => sparse_mask(args.n_pre, args.n_post, args.non, &mut rng),
    }
    .map_err(|e| e.to_string())?;

    let active = mask.iter().filter(|&&v| v == 1.0).count();
    log(
        level,
        LogLevel::Normal,
        &format!(
            "mask {}x{}: {} connections per unit, density {:.4}",
            args.n_pre,
            args.n_post,
            args.non,
            active as f64 / (args.n_pre * args.n_post) as f64
        ),
    );

    if let Some(path) = args.output {
        let mut snapshot = WeightSnapshot::new();
        snapshot.insert_matrix("mask", &mask);
        snapshot.save(&path).map_err(|e| e.to_string())?;
        log(
            level,
            LogLevel::Normal,
            &format!("mask written to {}", path.display()),
        );
    }
    Ok(())
}
