// src/models/ou_process.rs
use super::model::SdeModel;
use crate::error::SdeResult;

pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }
}

impl SdeModel for OuProcess {
    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _t: f64, _x: f64) -> f64 {
        self.sigma
    }

    fn diffusion_derivative(&self, _t: f64, _x: f64) -> SdeResult<f64> {
        Ok(0.0) // Derivative of a constant diffusion w.r.t. x is 0
    }
}
