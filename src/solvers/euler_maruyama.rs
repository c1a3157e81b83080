// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a scalar SDE:
//! ```text
//! dX_t = f(t, X_t) dt + g(t, X_t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! Y_{i+1} = Y_i + f(t_i, Y_i) Δt + g(t_i, Y_i) ΔW_i
//! ```
//!
//! Where:
//! - `f(t, x)` is the drift coefficient
//! - `g(t, x)` is the diffusion coefficient
//! - `ΔW_i ~ N(0, Δt)` are independent normal increments
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//!
//! # Error Behavior
//!
//! Each step is an explicit, deterministic function of the previous state,
//! the current grid time, and the pre-drawn increment. A coefficient that
//! evaluates to a non-finite value aborts the path immediately; there is
//! no retry and no recovery.

use super::{check_coefficient, check_state};
use crate::error::{validation::validate_finite, SdeError, SdeResult};
use crate::grid::{Path, TimeGrid};
use crate::models::model::SdeModel;
use crate::rng;
use rand::Rng;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Single Euler-Maruyama step with an externally supplied increment.
    ///
    /// # Algorithm
    ///
    /// 1. Evaluate drift: `f(t, y) * Δt`
    /// 2. Evaluate diffusion: `g(t, y) * ΔW`
    /// 3. Update: `y' = y + drift + diffusion`
    pub fn step_with_dw<M: SdeModel>(
        model: &M,
        y: f64,
        t: f64,
        dt: f64,
        dw: f64,
    ) -> SdeResult<f64> {
        let drift = check_coefficient("drift", model.drift(t, y), t, y)?;
        let diffusion = check_coefficient("diffusion", model.diffusion(t, y), t, y)?;
        check_state("Euler-Maruyama", y + drift * dt + diffusion * dw, t)
    }

    /// Run the full step loop against a pre-drawn increment sequence.
    ///
    /// This is the deterministic core: re-running with the same increments
    /// reproduces the same path bit-for-bit. The sequence length must equal
    /// the grid's step count; increment `i` applies between `t_i` and
    /// `t_{i+1}`.
    pub fn simulate_with_increments<M: SdeModel>(
        model: &M,
        grid: &TimeGrid,
        x0: f64,
        increments: &[f64],
    ) -> SdeResult<Path> {
        validate_finite("x0", x0)?;
        if increments.len() != grid.steps() {
            return Err(SdeError::InvalidConfiguration {
                field: "increments".to_string(),
                reason: format!(
                    "expected {} Wiener increments for this grid, got {}",
                    grid.steps(),
                    increments.len()
                ),
            });
        }

        let mut values = Vec::with_capacity(grid.num_points());
        values.push(x0);

        let mut y = x0;
        for (i, &dw) in increments.iter().enumerate() {
            y = Self::step_with_dw(model, y, grid.time(i), grid.dt(), dw)?;
            values.push(y);
        }

        Ok(Path::new(*grid, values))
    }

    /// Simulate one sample path on `grid`, starting from `x0`.
    ///
    /// Draws the grid's `n` Wiener increments from `rng`, then runs the
    /// step loop to completion on the calling thread.
    pub fn simulate<M: SdeModel, R: Rng + ?Sized>(
        model: &M,
        grid: &TimeGrid,
        x0: f64,
        rng: &mut R,
    ) -> SdeResult<Path> {
        let increments = rng::wiener_increments(rng, grid.dt(), grid.steps())?;
        Self::simulate_with_increments(model, grid, x0, &increments)
    }
}
