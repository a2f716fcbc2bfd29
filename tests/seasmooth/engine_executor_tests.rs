#![cfg(feature = "dev")]
//! Tests for the smoothing execution engine.
//!
//! These tests verify the pass structure of a run over a sorted series:
//! - SmoothConfig defaults
//! - Pass counts for plain and robust methods
//! - The one-point window shortcut
//! - Exactness on polynomial data
//! - Coincident x-values and missing samples
//! - Parallel parity (with the `parallel` feature)
//!
//! ## Test Organization
//!
//! 1. **Config Tests** - Defaults
//! 2. **Pass Structure** - Pass counts and robustness weights
//! 3. **Numerical Behaviour** - Exactness and global windows
//! 4. **Missing Data** - NaN handling and coincident x

use approx::assert_relative_eq;

use seasmooth::internals::algorithms::regression::{Degree, fit_local};
use seasmooth::internals::engine::executor::{DEFAULT_ITERATIONS, SmoothConfig, SmoothExecutor};
use seasmooth::internals::math::weights::tricube_weights;
use seasmooth::internals::primitives::sorting::ValidityMask;

fn run(config: SmoothConfig, x: &[f64], y: &[f64]) -> Vec<f64> {
    let valid = ValidityMask::from_series(x, y);
    SmoothExecutor::new(config).run(x, y, &valid).unwrap().smoothed
}

fn noisy_series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &v)| v.sin() + 0.2 * ((i * 7919) % 13) as f64 / 13.0)
        .collect();
    (x, y)
}

// ============================================================================
// Config Tests
// ============================================================================

/// Test SmoothConfig default values.
#[test]
fn test_config_defaults() {
    let config = SmoothConfig::default();

    assert_eq!(config.span, 5);
    assert_eq!(config.degree, Degree::Linear);
    assert!(!config.robust);
    assert_eq!(config.iterations, DEFAULT_ITERATIONS);
    assert_eq!(DEFAULT_ITERATIONS, 5);
    assert!(!config.parallel);
}

// ============================================================================
// Pass Structure Tests
// ============================================================================

/// Test that a plain method runs exactly one pass.
#[test]
fn test_plain_single_pass() {
    let (x, y) = noisy_series(20);
    let valid = ValidityMask::from_series(&x, &y);
    let out = SmoothExecutor::new(SmoothConfig::default())
        .run(&x, &y, &valid)
        .unwrap();

    assert_eq!(out.passes, 1);
    assert_eq!(out.smoothed.len(), 20);
    assert!(out.robustness_weights.is_none());
}

/// Test that a robust method runs one plus the configured passes.
#[test]
fn test_robust_pass_count() {
    let (x, y) = noisy_series(20);
    let valid = ValidityMask::from_series(&x, &y);
    let config = SmoothConfig {
        robust: true,
        iterations: 3,
        ..Default::default()
    };
    let out = SmoothExecutor::new(config).run(&x, &y, &valid).unwrap();

    assert_eq!(out.passes, 4);
    let weights = out.robustness_weights.unwrap();
    assert_eq!(weights.len(), 20);
    assert!(weights.iter().all(|&w| (0.0..=1.0).contains(&w)));
}

/// Test that zero robust passes match the plain method.
#[test]
fn test_robust_zero_iterations() {
    let (x, y) = noisy_series(15);
    let plain = run(SmoothConfig::default(), &x, &y);
    let robust = run(
        SmoothConfig {
            robust: true,
            iterations: 0,
            ..Default::default()
        },
        &x,
        &y,
    );

    assert_eq!(plain, robust);
}

/// Test that a one-point window leaves the data unchanged.
#[test]
fn test_window_one_returns_input() {
    let (x, y) = noisy_series(10);
    let valid = ValidityMask::from_series(&x, &y);
    let config = SmoothConfig {
        span: 1,
        robust: true,
        ..Default::default()
    };
    let out = SmoothExecutor::new(config).run(&x, &y, &valid).unwrap();

    assert_eq!(out.smoothed, y);
    assert_eq!(out.passes, 0);
}

/// Test that a single sample is returned unchanged.
#[test]
fn test_single_sample() {
    let out = run(SmoothConfig::default(), &[2.0], &[7.5]);
    assert_eq!(out, vec![7.5]);
}

/// Test that a one-point window still leaves missing x unfitted.
#[test]
fn test_window_one_nan_x() {
    let x = vec![0.0f64, 1.0, 2.0, f64::NAN];
    let y = vec![1.0f64, 2.0, 3.0, 4.0];
    let config = SmoothConfig {
        span: 1,
        robust: true,
        ..Default::default()
    };
    let out = run(config, &x, &y);

    assert_eq!(&out[..3], &[1.0, 2.0, 3.0]);
    assert!(out[3].is_nan());
}

/// Test that a single sample with missing x yields NaN.
#[test]
fn test_single_sample_nan_x() {
    let out = run(SmoothConfig::default(), &[f64::NAN], &[4.0]);
    assert_eq!(out.len(), 1);
    assert!(out[0].is_nan());
}

// ============================================================================
// Numerical Behaviour Tests
// ============================================================================

/// Test that local linear fits reproduce linear data.
#[test]
fn test_linear_data_exact() {
    let x: Vec<f64> = (0..25).map(|i| i as f64 * 0.4).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v - 1.0).collect();

    for robust in [false, true] {
        let config = SmoothConfig {
            span: 3,
            robust,
            ..Default::default()
        };
        let out = run(config, &x, &y);
        for (s, e) in out.iter().zip(y.iter()) {
            assert_relative_eq!(s, e, epsilon = 1e-9);
        }
    }
}

/// Test that local quadratic fits reproduce quadratic data.
#[test]
fn test_quadratic_data_exact() {
    let x: Vec<f64> = (0..25).map(|i| i as f64 * 0.25 - 3.0).collect();
    let y: Vec<f64> = x.iter().map(|v| 0.5 * v * v - v + 2.0).collect();

    for robust in [false, true] {
        let config = SmoothConfig {
            span: 4,
            degree: Degree::Quadratic,
            robust,
            ..Default::default()
        };
        let out = run(config, &x, &y);
        for (s, e) in out.iter().zip(y.iter()) {
            assert_relative_eq!(s, e, epsilon = 1e-9);
        }
    }
}

/// Test that a window covering every sample equals a direct global fit.
#[test]
fn test_global_window_matches_direct_fit() {
    let (x, y) = noisy_series(12);
    let config = SmoothConfig {
        span: 50,
        ..Default::default()
    };
    let out = run(config, &x, &y);

    for i in 0..x.len() {
        let centered: Vec<f64> = x.iter().map(|&v| v - x[i]).collect();
        let distances: Vec<f64> = centered.iter().map(|d| d.abs()).collect();
        let weights = tricube_weights(&distances);
        let direct = fit_local(&centered, &y, &weights, Degree::Linear).unwrap();
        assert_relative_eq!(out[i], direct, epsilon = 1e-12);
    }
}

/// Test that robust passes resist a single spike.
#[test]
fn test_robust_resists_spike() {
    let x: Vec<f64> = (0..21).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|v| 0.1 * v).collect();
    y[10] = 25.0;

    let plain = run(
        SmoothConfig {
            span: 6,
            ..Default::default()
        },
        &x,
        &y,
    );
    let robust = run(
        SmoothConfig {
            span: 6,
            robust: true,
            ..Default::default()
        },
        &x,
        &y,
    );

    let truth = 1.0;
    assert!((robust[10] - truth).abs() < (plain[10] - truth).abs());
    assert_relative_eq!(robust[10], truth, epsilon = 1e-6);
}

// ============================================================================
// Missing Data Tests
// ============================================================================

/// Test that a missing y still receives a trend value.
#[test]
fn test_missing_y_is_fitted() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|v| 3.0 * v).collect();
    y[4] = f64::NAN;

    let out = run(
        SmoothConfig {
            span: 4,
            ..Default::default()
        },
        &x,
        &y,
    );
    assert_relative_eq!(out[4], 12.0, epsilon = 1e-9);
}

/// Test that trailing NaN x-values yield NaN.
#[test]
fn test_nan_x_unfitted() {
    let x = vec![0.0f64, 1.0, 2.0, 3.0, f64::NAN];
    let y = vec![0.0f64, 1.0, 2.0, 3.0, 4.0];

    for robust in [false, true] {
        let out = run(
            SmoothConfig {
                span: 3,
                robust,
                ..Default::default()
            },
            &x,
            &y,
        );
        assert!(out[4].is_nan());
        assert!(out[..4].iter().all(|v| v.is_finite()));
    }
}

/// Test that all-missing y yields NaN everywhere without failing.
#[test]
fn test_all_missing_y() {
    let x = vec![0.0f64, 1.0, 2.0, 3.0];
    let y = vec![f64::NAN; 4];
    let valid = ValidityMask::from_series(&x, &y);
    let config = SmoothConfig {
        span: 3,
        robust: true,
        ..Default::default()
    };
    let out = SmoothExecutor::new(config).run(&x, &y, &valid).unwrap();

    assert!(out.smoothed.iter().all(|v| v.is_nan()));
}

/// Test that coincident x-values share one fitted value.
#[test]
fn test_coincident_x_copies_predecessor() {
    let x = vec![0.0f64, 1.0, 2.0, 2.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![0.0f64, 1.1, 1.9, 2.4, 2.2, 3.1, 3.8, 5.2];

    for robust in [false, true] {
        let out = run(
            SmoothConfig {
                span: 4,
                robust,
                ..Default::default()
            },
            &x,
            &y,
        );
        assert_eq!(out[2], out[3]);
        assert_eq!(out[3], out[4]);
    }
}

/// Test that parallel fitting matches sequential fitting.
#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let (x, mut y) = noisy_series(200);
    y[50] = 40.0;
    y[120] = -30.0;

    for degree in [Degree::Linear, Degree::Quadratic] {
        let base = SmoothConfig {
            span: 15,
            degree,
            robust: true,
            ..Default::default()
        };
        let sequential = run(base, &x, &y);
        let parallel = run(
            SmoothConfig {
                parallel: true,
                ..base
            },
            &x,
            &y,
        );
        assert_eq!(sequential, parallel);
    }
}
