//! End-to-end scenarios through the façade's function-call API.
//!
//! These integration tests exercise `simulate`, the closed-form pricers and
//! `ScenarioConfig` together.

use approx::assert_abs_diff_eq;
use jumpdiffusion::core::Error;
use jumpdiffusion::math::seeded_rng;
use jumpdiffusion::{
    black_scholes_call, black_scholes_put, merton_jump_call, merton_jump_put, simulate,
    simulate_with_rng, ScenarioConfig,
};

const S: f64 = 100.0;
const K: f64 = 100.0;
const T: f64 = 1.0;
const R: f64 = 0.02;
const SIGMA: f64 = 0.2;

// ───────────────────────── closed form ─────────────────────────

#[test]
fn test_black_scholes_reference_values() {
    assert_abs_diff_eq!(black_scholes_call(S, K, T, R, SIGMA), 8.9160, epsilon = 1e-3);
    // Parity-consistent put: 8.9160 - 100 + 100 e^{-0.02}.
    assert_abs_diff_eq!(black_scholes_put(S, K, T, R, SIGMA), 6.9359, epsilon = 1e-3);
}

#[test]
fn test_put_call_parity_across_strikes() {
    for k in [60.0, 80.0, 100.0, 120.0, 150.0] {
        let parity = S - k * (-R * T).exp();
        assert_abs_diff_eq!(
            black_scholes_call(S, k, T, R, SIGMA) - black_scholes_put(S, k, T, R, SIGMA),
            parity,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            merton_jump_call(S, k, T, R, SIGMA, 1.0, 0.3, 1.0)
                - merton_jump_put(S, k, T, R, SIGMA, 1.0, 0.3, 1.0),
            parity,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_merton_without_jumps_is_black_scholes() {
    for m in [0.0, 0.5, 1.0] {
        assert_abs_diff_eq!(
            merton_jump_call(S, K, T, R, SIGMA, m, 0.3, 0.0),
            black_scholes_call(S, K, T, R, SIGMA),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            merton_jump_put(S, K, T, R, SIGMA, m, 0.3, 0.0),
            black_scholes_put(S, K, T, R, SIGMA),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_merton_reference_value() {
    assert_abs_diff_eq!(
        merton_jump_call(S, K, T, R, SIGMA, 1.0, 0.3, 1.0),
        14.314216,
        epsilon = 1e-4
    );
    assert_abs_diff_eq!(
        merton_jump_put(S, K, T, R, SIGMA, 1.0, 0.3, 1.0),
        12.334084,
        epsilon = 1e-4
    );
}

#[test]
fn test_jumps_add_value() {
    let bs = black_scholes_call(S, K, T, R, SIGMA);
    let low = merton_jump_call(S, K, T, R, SIGMA, 1.0, 0.3, 0.5);
    let high = merton_jump_call(S, K, T, R, SIGMA, 1.0, 0.3, 1.0);
    assert!(bs < low && low < high, "{bs} < {low} < {high}");
}

// ───────────────────────── simulation ─────────────────────────

#[test]
fn test_default_scenario_shape_and_positivity() {
    let c = ScenarioConfig::default();
    let paths = simulate(
        c.spot,
        c.maturity,
        c.risk_free_rate,
        c.volatility,
        c.jump_intensity,
        c.jump_mean,
        c.jump_vol,
        c.steps,
        c.num_paths,
    )
    .unwrap();
    assert_eq!(paths.shape(), (10_000, 1));
    assert!(paths.as_matrix().iter().all(|&x| x.is_finite() && x > 0.0));
}

#[test]
fn test_unseeded_calls_differ() {
    let a = simulate(S, T, R, SIGMA, 1.0, 0.0, 0.3, 100, 3).unwrap();
    let b = simulate(S, T, R, SIGMA, 1.0, 0.0, 0.3, 100, 3).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_seeded_calls_repeat() {
    let a = simulate_with_rng(S, T, R, SIGMA, 2.0, 0.1, 0.2, 64, 5, &mut seeded_rng(11)).unwrap();
    let b = simulate_with_rng(S, T, R, SIGMA, 2.0, 0.1, 0.2, 64, 5, &mut seeded_rng(11)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_inputs_fail_before_simulating() {
    let cases = [
        simulate(0.0, T, R, SIGMA, 1.0, 0.0, 0.3, 10, 1),
        simulate(S, 0.0, R, SIGMA, 1.0, 0.0, 0.3, 10, 1),
        simulate(S, T, R, -0.1, 1.0, 0.0, 0.3, 10, 1),
        simulate(S, T, R, SIGMA, -1.0, 0.0, 0.3, 10, 1),
        simulate(S, T, R, SIGMA, 1.0, 0.0, -0.3, 10, 1),
        simulate(S, T, R, SIGMA, 1.0, 0.0, 0.3, 0, 1),
        simulate(S, T, R, SIGMA, 1.0, 0.0, 0.3, 10, 0),
        simulate(S, T, f64::NAN, SIGMA, 1.0, 0.0, 0.3, 10, 1),
    ];
    for result in cases {
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}

// ───────────────────────── configuration ─────────────────────────

#[test]
fn test_toml_scenario_drives_simulation() {
    let c = ScenarioConfig::from_toml_str(
        r#"
        spot = 50.0
        steps = 12
        num_paths = 4
        seed = 9
        "#,
    )
    .unwrap();
    c.validate().unwrap();
    let paths = c.path_generator().unwrap().simulate(&mut c.rng());
    assert_eq!(paths.shape(), (12, 4));
    assert!(paths.terminal_values().iter().all(|&x| x > 0.0));
}
