// src/grid.rs
//! Time Grid and Sample Path Containers
//!
//! # Grid Convention
//!
//! A simulation interval `[t0, tfin]` with step size `dt` is discretized
//! into `n = round((tfin - t0)/dt)` steps, giving `n + 1` grid points
//! `t_i = t0 + i*dt`. With a step size that does not divide the interval
//! evenly, the final grid point is the nearest multiple of `dt`, not
//! `tfin` itself.
//!
//! A [`Path`] holds the `n + 1` realized state values, index-aligned with
//! the grid, with `path[0]` fixed to the initial value at creation.

use crate::error::{validation::*, SdeError, SdeResult};

/// Uniform time grid defined by its bounds and a fixed step size.
///
/// Construction validates the inputs: all bounds finite, `dt > 0`, and
/// `tfin >= t0`. Equal bounds are legal and produce a grid with a single
/// point (no steps).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t0: f64,
    tfin: f64,
    dt: f64,
    steps: usize,
}

impl TimeGrid {
    pub fn new(t0: f64, tfin: f64, dt: f64) -> SdeResult<Self> {
        validate_finite("t0", t0)?;
        validate_finite("tfin", tfin)?;
        validate_finite("dt", dt)?;
        validate_positive("dt", dt)?;
        if tfin < t0 {
            return Err(SdeError::InvalidConfiguration {
                field: "tfin".to_string(),
                reason: format!("upper bound {} precedes lower bound {}", tfin, t0),
            });
        }

        let steps = ((tfin - t0) / dt).round() as usize;
        Ok(TimeGrid {
            t0,
            tfin,
            dt,
            steps,
        })
    }

    /// Number of integration steps `n`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of grid points, `n + 1`.
    pub fn num_points(&self) -> usize {
        self.steps + 1
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }

    pub fn tfin(&self) -> f64 {
        self.tfin
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// The i-th grid time, `t0 + i*dt`.
    pub fn time(&self, i: usize) -> f64 {
        self.t0 + i as f64 * self.dt
    }

    /// All grid times in order, for pairing with a path's values.
    pub fn times(&self) -> Vec<f64> {
        (0..self.num_points()).map(|i| self.time(i)).collect()
    }
}

/// One realized sample path on a [`TimeGrid`].
///
/// Values are ordered in time, never mutated after creation, and owned
/// exclusively by the caller that requested the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    grid: TimeGrid,
    values: Vec<f64>,
}

impl Path {
    pub(crate) fn new(grid: TimeGrid, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), grid.num_points());
        Path { grid, values }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of points, `n + 1`. Always at least 1.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The initial value `Y_0`.
    pub fn initial(&self) -> f64 {
        self.values[0]
    }

    /// The final value `Y_n`.
    pub fn terminal(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// `(t_i, Y_i)` pairs in time order, ready for a plotting consumer.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let grid = self.grid;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &y)| (grid.time(i), y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_count() {
        let grid = TimeGrid::new(0.0, 1.0, 0.25).unwrap();
        assert_eq!(grid.steps(), 4);
        assert_eq!(grid.num_points(), 5);

        let grid = TimeGrid::new(0.0, 10.0, 0.1).unwrap();
        assert_eq!(grid.steps(), 100);
        assert_eq!(grid.num_points(), 101);
    }

    #[test]
    fn test_grid_rounds_uneven_interval() {
        // (1 - 0) / 0.3 = 3.33 rounds to 3 steps
        let grid = TimeGrid::new(0.0, 1.0, 0.3).unwrap();
        assert_eq!(grid.steps(), 3);
        assert!((grid.time(3) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_grid_times_are_offsets_from_t0() {
        let grid = TimeGrid::new(2.0, 3.0, 0.25).unwrap();
        let times = grid.times();
        assert_eq!(times.len(), 5);
        for (i, &t) in times.iter().enumerate() {
            assert_eq!(t, 2.0 + i as f64 * 0.25);
        }
    }

    #[test]
    fn test_degenerate_grid_has_one_point() {
        let grid = TimeGrid::new(1.0, 1.0, 0.5).unwrap();
        assert_eq!(grid.steps(), 0);
        assert_eq!(grid.num_points(), 1);
        assert_eq!(grid.times(), vec![1.0]);
    }

    #[test]
    fn test_grid_rejects_bad_inputs() {
        assert!(TimeGrid::new(0.0, 1.0, 0.0).is_err());
        assert!(TimeGrid::new(0.0, 1.0, -0.1).is_err());
        assert!(TimeGrid::new(0.0, 1.0, f64::NAN).is_err());
        assert!(TimeGrid::new(1.0, 0.0, 0.1).is_err());
        assert!(TimeGrid::new(f64::INFINITY, 1.0, 0.1).is_err());
    }

    #[test]
    fn test_path_accessors() {
        let grid = TimeGrid::new(0.0, 1.0, 0.5).unwrap();
        let path = Path::new(grid, vec![1.0, 2.0, 3.0]);
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path.initial(), 1.0);
        assert_eq!(path.terminal(), 3.0);
        assert_eq!(path.values(), &[1.0, 2.0, 3.0]);

        let points: Vec<(f64, f64)> = path.points().collect();
        assert_eq!(points, vec![(0.0, 1.0), (0.5, 2.0), (1.0, 3.0)]);
    }
}
