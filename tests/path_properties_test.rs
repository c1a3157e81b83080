// tests/path_properties_test.rs
use sde_path::grid::TimeGrid;
use sde_path::math_utils::{sample_mean, sample_variance};
use sde_path::models::gbm::Gbm;
use sde_path::models::model::{Coeffs, CoeffsWithDerivative};
use sde_path::rng;
use sde_path::solvers::{euler_maruyama::EulerMaruyama, milstein::Milstein};

#[test]
fn test_path_length_matches_grid() {
    let model = Gbm::new(0.05, 0.2);

    for &(t0, tfin, dt) in &[
        (0.0, 1.0, 0.25),
        (0.0, 10.0, 0.1),
        (2.0, 2.0, 0.5),
        (0.0, 1.0, 0.3),
        (-1.0, 1.0, 0.5),
    ] {
        let grid = TimeGrid::new(t0, tfin, dt).unwrap();
        let expected = ((tfin - t0) / dt).round() as usize + 1;

        let mut rng = rng::seed_rng_from_u64(13);
        let euler = EulerMaruyama::simulate(&model, &grid, 1.0, &mut rng).unwrap();
        assert_eq!(euler.len(), expected);

        let mut rng = rng::seed_rng_from_u64(13);
        let milstein = Milstein::simulate(&model, &grid, 1.0, &mut rng).unwrap();
        assert_eq!(milstein.len(), expected);
    }
}

#[test]
fn test_initial_value_is_exact() {
    let model = Gbm::new(0.05, 0.2);
    let grid = TimeGrid::new(0.0, 1.0, 0.01).unwrap();
    let x0 = 123.456;

    let mut rng = rng::seed_rng_from_u64(21);
    let euler = EulerMaruyama::simulate(&model, &grid, x0, &mut rng).unwrap();
    assert_eq!(euler.initial(), x0);

    let mut rng = rng::seed_rng_from_u64(21);
    let milstein = Milstein::simulate(&model, &grid, x0, &mut rng).unwrap();
    assert_eq!(milstein.initial(), x0);
}

#[test]
fn test_same_seed_reproduces_path_exactly() {
    let model = Gbm::new(0.05, 0.2);
    let grid = TimeGrid::new(0.0, 1.0, 0.01).unwrap();

    let mut rng_a = rng::seed_rng_from_u64(42);
    let a = EulerMaruyama::simulate(&model, &grid, 100.0, &mut rng_a).unwrap();

    let mut rng_b = rng::seed_rng_from_u64(42);
    let b = EulerMaruyama::simulate(&model, &grid, 100.0, &mut rng_b).unwrap();

    assert_eq!(a.values(), b.values());
}

#[test]
fn test_milstein_matches_euler_when_correction_vanishes() {
    // Diffusion with an identically zero state-derivative: the correction
    // term is exactly zero and the two schemes agree bit-for-bit
    let euler_model = Coeffs::new(|t, x| 0.3 * x + t, |t, _x| 1.0 + t);
    let milstein_model =
        CoeffsWithDerivative::new(|t, x| 0.3 * x + t, |t, _x| 1.0 + t, |_t, _x| 0.0);
    let grid = TimeGrid::new(0.0, 2.0, 0.125).unwrap();

    let mut rng = rng::seed_rng_from_u64(77);
    let increments = rng::wiener_increments(&mut rng, grid.dt(), grid.steps()).unwrap();

    let euler =
        EulerMaruyama::simulate_with_increments(&euler_model, &grid, 0.5, &increments).unwrap();
    let milstein =
        Milstein::simulate_with_increments(&milstein_model, &grid, 0.5, &increments).unwrap();

    assert_eq!(euler.values(), milstein.values());
}

#[test]
fn test_single_step_variance_scales_with_dt() {
    // f = 0, g = 1 from x0 = 0: one Euler-Maruyama step returns the raw
    // Wiener increment, so terminal values over many trials are N(0, dt)
    let model = Coeffs::new(|_t, _x| 0.0, |_t, _x| 1.0);
    let dt = 0.1;
    let grid = TimeGrid::new(0.0, dt, dt).unwrap();
    let trials = 100_000;

    let mut rng = rng::seed_rng_from_u64(4242);
    let mut terminals = Vec::with_capacity(trials);
    for _ in 0..trials {
        let path = EulerMaruyama::simulate(&model, &grid, 0.0, &mut rng).unwrap();
        terminals.push(path.terminal());
    }

    let mean = sample_mean(&terminals);
    let variance = sample_variance(&terminals);
    assert!(
        mean.abs() < 0.01,
        "Terminal mean should be close to 0, got {}",
        mean
    );
    assert!(
        (variance - dt).abs() < 0.05 * dt,
        "Terminal variance should be close to dt = {}, got {}",
        dt,
        variance
    );
}

#[test]
fn test_degenerate_interval_draws_no_increments() {
    let model = Gbm::new(0.05, 0.2);
    let grid = TimeGrid::new(1.0, 1.0, 0.25).unwrap();

    let mut used = rng::seed_rng_from_u64(9);
    let path = EulerMaruyama::simulate(&model, &grid, 5.0, &mut used).unwrap();
    assert_eq!(path.values(), &[5.0]);

    // The generator must be untouched: its next draw matches a fresh
    // generator with the same seed
    let mut fresh = rng::seed_rng_from_u64(9);
    assert_eq!(rng::get_normal_draw(&mut used), rng::get_normal_draw(&mut fresh));
}
