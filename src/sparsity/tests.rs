use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::Error;

fn curve(k: &[f64], sensitivity: &[f64]) -> SensitivityCurve {
    SensitivityCurve {
        k: k.to_vec(),
        sensitivity: sensitivity.to_vec(),
    }
}

#[test]
fn test_optimal_k_picks_argmin() {
    let c = curve(&[1.0, 2.0, 3.0], &[0.5, 0.1, 0.9]);
    assert_eq!(c.optimal_k(), Some(2.0));
}

#[test]
fn test_optimal_k_first_minimum_on_ties() {
    let c = curve(&[1.0, 2.0, 3.0], &[0.1, 0.1, 0.9]);
    assert_eq!(c.optimal_k(), Some(1.0));
}

#[test]
fn test_optimal_k_empty_curve() {
    let c = curve(&[], &[]);
    assert_eq!(c.optimal_k(), None);
}

#[test]
fn test_estimate_single_curve_degenerate_interval() {
    let curves = vec![curve(&[1.0, 2.0, 3.0], &[0.5, 0.1, 0.9])];
    let mut rng = StdRng::seed_from_u64(0);
    let estimate = estimate_optimal_k(&curves, 1000, &mut rng).unwrap();
    assert_eq!(estimate.optimal_k, 2.0);
    assert_eq!(estimate.ci_lower, 2.0);
    assert_eq!(estimate.ci_upper, 2.0);
    assert_eq!(estimate.k_range, vec![1.0, 2.0, 3.0]);
    assert_eq!(estimate.n_curves, 1);
}

#[test]
fn test_estimate_averages_across_curves() {
    let curves = vec![
        curve(&[1.0, 2.0, 3.0], &[0.9, 0.5, 0.1]), // optimum 3
        curve(&[1.0, 2.0, 3.0], &[0.1, 0.5, 0.9]), // optimum 1
    ];
    let mut rng = StdRng::seed_from_u64(1);
    let estimate = estimate_optimal_k(&curves, 1000, &mut rng).unwrap();
    assert_relative_eq!(estimate.optimal_k, 2.0);
    assert!(estimate.ci_lower <= estimate.optimal_k);
    assert!(estimate.ci_upper >= estimate.optimal_k);
}

#[test]
fn test_estimate_rejects_empty_table() {
    let mut rng = StdRng::seed_from_u64(2);
    assert!(matches!(
        estimate_optimal_k(&[], 100, &mut rng),
        Err(Error::EmptyTable)
    ));
}

#[test]
fn test_estimate_rejects_empty_curve() {
    let curves = vec![curve(&[1.0], &[0.5]), curve(&[], &[])];
    let mut rng = StdRng::seed_from_u64(3);
    assert!(matches!(
        estimate_optimal_k(&curves, 100, &mut rng),
        Err(Error::EmptyCurve { index: 1 })
    ));
}

#[test]
fn test_estimate_rejects_mismatched_curve() {
    let curves = vec![curve(&[1.0, 2.0], &[0.5])];
    let mut rng = StdRng::seed_from_u64(4);
    assert!(matches!(
        estimate_optimal_k(&curves, 100, &mut rng),
        Err(Error::CurveLengthMismatch { index: 0, .. })
    ));
}

#[test]
fn test_power_law_recovers_exact_relation() {
    // k = 2 * m^0.5, i.e. log k = 0.5 log m + ln 2
    let m: [f64; 4] = [50.0, 100.0, 500.0, 1000.0];
    let k: Vec<f64> = m.iter().map(|v| 2.0 * v.sqrt()).collect();
    let fit = fit_power_law(&m, &k).unwrap();
    assert_relative_eq!(fit.exponent, 0.5, epsilon = 1e-10);
    assert_relative_eq!(fit.intercept, 2.0f64.ln(), epsilon = 1e-10);
    assert_relative_eq!(fit.predict(200.0), 2.0 * 200.0f64.sqrt(), epsilon = 1e-8);
}

#[test]
fn test_power_law_rejects_non_positive() {
    assert!(matches!(
        fit_power_law(&[10.0, 0.0], &[1.0, 2.0]),
        Err(Error::NonPositiveFit)
    ));
    assert!(matches!(
        fit_power_law(&[10.0, 20.0], &[1.0, -2.0]),
        Err(Error::NonPositiveFit)
    ));
}

#[test]
fn test_power_law_rejects_length_mismatch() {
    assert!(matches!(
        fit_power_law(&[10.0], &[1.0, 2.0]),
        Err(Error::LengthMismatch { left: 1, right: 2 })
    ));
}

#[test]
fn test_curve_serde_round_trip() {
    let c = curve(&[1.0, 2.0], &[0.3, 0.2]);
    let json = serde_json::to_string(&c).unwrap();
    let back: SensitivityCurve = serde_json::from_str(&json).unwrap();
    assert_eq!(c, back);
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn estimate_interval_contains_point(
            optima in prop::collection::vec(1.0f64..100.0, 1..20),
            seed in 0u64..500,
        ) {
            let curves: Vec<SensitivityCurve> = optima
                .iter()
                .map(|&k| SensitivityCurve {
                    k: vec![k],
                    sensitivity: vec![0.0],
                })
                .collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate = estimate_optimal_k(&curves, 200, &mut rng).unwrap();
            prop_assert!(estimate.ci_lower <= estimate.optimal_k);
            prop_assert!(estimate.ci_upper >= estimate.optimal_k);
        }
    }
}
