// src/models/model.rs
use crate::error::{SdeError, SdeResult};

/// Coefficients of a scalar SDE `dX = f(t, X) dt + g(t, X) dW`, evaluated
/// pointwise as `(t, x) -> f64`.
///
/// The solvers depend only on this contract, never on how the
/// coefficients were produced: hand-written models and closure adapters
/// plug in the same way an upstream expression compiler would.
pub trait SdeModel {
    /// Drift coefficient `f(t, x)`.
    fn drift(&self, t: f64, x: f64) -> f64;

    /// Diffusion coefficient `g(t, x)`.
    fn diffusion(&self, t: f64, x: f64) -> f64;

    /// Partial derivative of the diffusion coefficient with respect to the
    /// state, `g_x(t, x)`. Needed by the Milstein scheme only.
    ///
    /// Models without a closed-form derivative keep the default, which
    /// reports the derivative as missing; Milstein then fails instead of
    /// silently degrading to Euler-Maruyama.
    fn diffusion_derivative(&self, _t: f64, _x: f64) -> SdeResult<f64> {
        Err(SdeError::MissingDerivative {
            model: std::any::type_name::<Self>().to_string(),
        })
    }
}

/// Drift/diffusion pair built from plain closures.
pub struct Coeffs<F, G> {
    drift: F,
    diffusion: G,
}

impl<F, G> Coeffs<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    pub fn new(drift: F, diffusion: G) -> Self {
        Coeffs { drift, diffusion }
    }
}

impl<F, G> SdeModel for Coeffs<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    fn drift(&self, t: f64, x: f64) -> f64 {
        (self.drift)(t, x)
    }

    fn diffusion(&self, t: f64, x: f64) -> f64 {
        (self.diffusion)(t, x)
    }
}

/// Closure-backed coefficients with a closed-form diffusion derivative,
/// as required by the Milstein scheme.
pub struct CoeffsWithDerivative<F, G, D> {
    drift: F,
    diffusion: G,
    diffusion_derivative: D,
}

impl<F, G, D> CoeffsWithDerivative<F, G, D>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    pub fn new(drift: F, diffusion: G, diffusion_derivative: D) -> Self {
        CoeffsWithDerivative {
            drift,
            diffusion,
            diffusion_derivative,
        }
    }
}

impl<F, G, D> SdeModel for CoeffsWithDerivative<F, G, D>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    fn drift(&self, t: f64, x: f64) -> f64 {
        (self.drift)(t, x)
    }

    fn diffusion(&self, t: f64, x: f64) -> f64 {
        (self.diffusion)(t, x)
    }

    fn diffusion_derivative(&self, t: f64, x: f64) -> SdeResult<f64> {
        Ok((self.diffusion_derivative)(t, x))
    }
}
