use clap::Parser;
use ndarray::{array, Array1, Array2};
use tempfile::tempdir;

use crate::cli::{Cli, Command, ModeArg};
use crate::config::{save_config, ExperimentConfig};
use crate::io::{WeightSnapshot, SNAPSHOT_FILE, W_ORN};
use crate::sparsity::SensitivityCurve;

use super::run_command;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[test]
fn test_parse_score_defaults() {
    let cli = parse(&["olfato", "score", "model.json", "--groups", "50"]);
    match cli.command {
        Command::Score(args) => {
            assert_eq!(args.groups, 50);
            assert_eq!(args.param, "w_orn");
            assert_eq!(args.mode, ModeArg::Tile);
            assert!(!args.sim);
        }
        _ => panic!("expected score command"),
    }
}

#[test]
fn test_parse_mask_with_groups_and_seed() {
    let cli = parse(&[
        "olfato", "mask", "500", "2500", "7", "--groups", "50", "--seed", "1",
    ]);
    match cli.command {
        Command::Mask(args) => {
            assert_eq!((args.n_pre, args.n_post, args.non), (500, 2500, 7));
            assert_eq!(args.groups, Some(50));
            assert_eq!(args.seed, Some(1));
        }
        _ => panic!("expected mask command"),
    }
}

#[test]
fn test_parse_global_quiet_flag() {
    let cli = parse(&["olfato", "--quiet", "sparsity", "model.json"]);
    assert!(cli.quiet);
    assert!(!cli.verbose);
}

#[test]
fn test_run_score_on_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SNAPSHOT_FILE);
    let mut snapshot = WeightSnapshot::new();
    snapshot.insert_matrix(W_ORN, &array![[1.0f32, 0.5], [0.0, 0.5], [1.0, 0.5], [0.0, 0.5]]);
    snapshot.save(&path).unwrap();

    let cli = parse(&[
        "olfato",
        "--quiet",
        "score",
        path.to_str().unwrap(),
        "--groups",
        "2",
        "--sim",
    ]);
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_score_missing_param() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SNAPSHOT_FILE);
    WeightSnapshot::new().save(&path).unwrap();

    let cli = parse(&[
        "olfato",
        "--quiet",
        "score",
        path.to_str().unwrap(),
        "--groups",
        "2",
    ]);
    let err = run_command(cli).unwrap_err();
    assert!(err.contains("w_orn"), "unexpected error: {err}");
}

#[test]
fn test_run_sparsity_and_mask_round_trip() {
    let dir = tempdir().unwrap();
    let mask_path = dir.path().join("mask.json");

    let cli = parse(&[
        "olfato",
        "--quiet",
        "mask",
        "50",
        "20",
        "7",
        "--seed",
        "3",
        "--output",
        mask_path.to_str().unwrap(),
    ]);
    run_command(cli).unwrap();

    // The generated mask is itself a scoreable matrix with exactly 7
    // suprathreshold entries per unit.
    let cli = parse(&[
        "olfato",
        "--quiet",
        "sparsity",
        mask_path.to_str().unwrap(),
        "--param",
        "mask",
        "--threshold",
        "0.5",
    ]);
    run_command(cli).unwrap();

    let snapshot = WeightSnapshot::load(&mask_path).unwrap();
    let mask = snapshot.matrix("mask").unwrap();
    assert_eq!(crate::analysis::mean_claw_count(&mask, 0.5), 7.0);
}

#[test]
fn test_run_optimal_k_over_table_dir() {
    let dir = tempdir().unwrap();
    for (m, optimum) in [(50u64, 7.0f64), (1000, 40.0)] {
        let curves = vec![SensitivityCurve {
            k: vec![optimum - 1.0, optimum, optimum + 1.0],
            sensitivity: vec![0.4, 0.1, 0.8],
        }];
        std::fs::write(
            dir.path().join(format!("sensitivity_m{m}.json")),
            serde_json::to_string(&curves).unwrap(),
        )
        .unwrap();
    }

    let cli = parse(&[
        "olfato",
        "--quiet",
        "optimal-k",
        dir.path().to_str().unwrap(),
        "--seed",
        "0",
        "--resamples",
        "100",
    ]);
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_optimal_k_empty_dir_fails() {
    let dir = tempdir().unwrap();
    let cli = parse(&[
        "olfato",
        "--quiet",
        "optimal-k",
        dir.path().to_str().unwrap(),
    ]);
    assert!(run_command(cli).is_err());
}

#[test]
fn test_run_oracle_on_separable_data() {
    let dir = tempdir().unwrap();

    let mut proto_snapshot = WeightSnapshot::new();
    proto_snapshot.insert_matrix("prototype", &Array2::eye(3));
    let proto_path = dir.path().join("prototypes.json");
    proto_snapshot.save(&proto_path).unwrap();

    let mut data_snapshot = WeightSnapshot::new();
    data_snapshot.insert_matrix("val_x", &Array2::eye(3));
    data_snapshot.insert_vector("val_y", &Array1::from_vec(vec![0.0, 1.0, 2.0]));
    let data_path = dir.path().join("data.json");
    data_snapshot.save(&data_path).unwrap();

    let cli = parse(&[
        "olfato",
        "--quiet",
        "oracle",
        proto_path.to_str().unwrap(),
        data_path.to_str().unwrap(),
        "--seed",
        "0",
    ]);
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_validate_config_dir() {
    let dir = tempdir().unwrap();
    save_config(&ExperimentConfig::default(), dir.path()).unwrap();

    let cli = parse(&[
        "olfato",
        "--quiet",
        "validate",
        dir.path().to_str().unwrap(),
    ]);
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_validate_rejects_bad_config() {
    let dir = tempdir().unwrap();
    let mut config = ExperimentConfig::default();
    config.kc_inputs = 10_000;
    save_config(&config, dir.path()).unwrap();

    let cli = parse(&[
        "olfato",
        "--quiet",
        "validate",
        dir.path().to_str().unwrap(),
    ]);
    assert!(run_command(cli).is_err());
}
