//! # sde-path: Fixed-Step Path Sampling for Scalar SDEs
//!
//! A Rust library for simulating scalar stochastic differential equations
//! of the form
//!
//! ```text
//! dX_t = f(t, X_t) dt + g(t, X_t) dW_t
//! ```
//!
//! one discretized sample path at a time, where `W` is a standard Wiener
//! process.
//!
//! ## Key Features
//!
//! - **Two explicit fixed-step schemes**: Euler-Maruyama (strong order 0.5)
//!   and Milstein (strong order 1.0, via the state-derivative of the
//!   diffusion coefficient)
//! - **Coefficients as plain callables**: built-in models or closure-backed
//!   drift/diffusion pairs, evaluated as `(t, x) -> f64`
//! - **Explicit randomness**: Gaussian increments come from a generator the
//!   caller passes in, so paths are seedable and parallel-safe
//! - **Parallel ensembles**: independent paths fan out across threads with
//!   Rayon, one generator per path
//! - **Robust error surface**: invalid grids, non-finite coefficient
//!   evaluations, and missing diffusion derivatives fail loudly
//!
//! ## Quick Start
//!
//! ```rust
//! use sde_path::grid::TimeGrid;
//! use sde_path::models::gbm::Gbm;
//! use sde_path::rng;
//! use sde_path::solvers::euler_maruyama::EulerMaruyama;
//!
//! // Geometric Brownian motion: dX = 0.05 X dt + 0.2 X dW
//! let model = Gbm::new(0.05, 0.2);
//! let grid = TimeGrid::new(0.0, 1.0, 1.0 / 252.0).expect("valid grid");
//! let mut rng = rng::seed_rng_from_u64(42);
//!
//! let path = EulerMaruyama::simulate(&model, &grid, 100.0, &mut rng).expect("valid inputs");
//! assert_eq!(path.len(), 253);
//! assert_eq!(path.initial(), 100.0);
//! println!("terminal value: {:.4}", path.terminal());
//! ```
//!
//! ## Mathematical Foundation
//!
//! On the grid `t_i = t0 + i*dt` with `n = round((tfin - t0)/dt)` steps,
//! both schemes advance a single running value through pre-drawn Wiener
//! increments `W_i ~ N(0, dt)`:
//!
//! ```text
//! Euler-Maruyama:  Y_{i+1} = Y_i + f(t_i, Y_i) dt + g(t_i, Y_i) W_i
//! Milstein:        Y_{i+1} = Y_i + f(t_i, Y_i) dt + g(t_i, Y_i) W_i
//!                          + 1/2 g(t_i, Y_i) g_x(t_i, Y_i) (W_i^2 - dt)
//! ```
//!
//! The Milstein correction captures the quadratic variation of the noise
//! and lifts the strong order from 0.5 to 1.0.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod grid;
pub mod models;
pub mod solvers;
pub mod ensemble;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use grid::{Path, TimeGrid};
