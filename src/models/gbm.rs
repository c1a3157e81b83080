// src/models/gbm.rs
use super::model::SdeModel;
use crate::error::SdeResult;

pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Exact lognormal transition over one step, used to check discretized
    /// paths against the closed-form solution.
    pub fn exact_step(&self, x_t: f64, dt: f64, normal_draw: f64) -> f64 {
        x_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }
}

impl SdeModel for Gbm {
    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.mu * x
    }

    fn diffusion(&self, _t: f64, x: f64) -> f64 {
        self.sigma * x
    }

    fn diffusion_derivative(&self, _t: f64, _x: f64) -> SdeResult<f64> {
        Ok(self.sigma)
    }
}
