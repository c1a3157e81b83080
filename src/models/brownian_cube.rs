// src/models/brownian_cube.rs
use super::model::SdeModel;
use crate::error::SdeResult;

/// State equal to the cube of a drifted, scaled Brownian motion:
///
/// ```text
/// dX = ((1/3) X^(1/3) + 6 X^(2/3)) dt + X^(2/3) dW
/// ```
///
/// has the pathwise solution `X_t = (x0^(1/3) + 2t + W_t/3)^3`, which
/// makes it a useful fixture with state-dependent diffusion and a known
/// closed form. The fractional powers are real only for non-negative
/// states; evaluating the coefficients at a negative state yields NaN and
/// aborts the path, and the diffusion derivative diverges at zero.
pub struct BrownianCube;

impl BrownianCube {
    pub fn new() -> Self {
        BrownianCube
    }

    /// Closed-form value at time `t`, given the Brownian value `W_t`.
    pub fn exact_value(&self, x0: f64, t: f64, w_t: f64) -> f64 {
        let u = x0.cbrt() + 2.0 * t + w_t / 3.0;
        u * u * u
    }
}

impl Default for BrownianCube {
    fn default() -> Self {
        BrownianCube::new()
    }
}

impl SdeModel for BrownianCube {
    fn drift(&self, _t: f64, x: f64) -> f64 {
        x.powf(1.0 / 3.0) / 3.0 + 6.0 * x.powf(2.0 / 3.0)
    }

    fn diffusion(&self, _t: f64, x: f64) -> f64 {
        x.powf(2.0 / 3.0)
    }

    fn diffusion_derivative(&self, _t: f64, x: f64) -> SdeResult<f64> {
        Ok(2.0 / 3.0 * x.powf(-1.0 / 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_value_matches_coefficients_at_t0() {
        let model = BrownianCube::new();
        // With no elapsed time and no noise the closed form returns x0
        assert!((model.exact_value(8.0, 0.0, 0.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_state_is_a_domain_error() {
        let model = BrownianCube::new();
        assert!(model.drift(0.0, -1.0).is_nan());
        assert!(model.diffusion(0.0, -1.0).is_nan());
    }
}
