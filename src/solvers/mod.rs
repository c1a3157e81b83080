pub mod euler_maruyama;
pub mod milstein;

use crate::error::{SdeError, SdeResult};

/// A coefficient evaluation is only usable if it came back finite; `1/0`
/// and fractional powers of negative numbers surface here as inf/NaN.
pub(crate) fn check_coefficient(
    coefficient: &'static str,
    value: f64,
    t: f64,
    x: f64,
) -> SdeResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SdeError::CoefficientEvaluation {
            coefficient: coefficient.to_string(),
            value,
            t,
            x,
        })
    }
}

pub(crate) fn check_state(method: &'static str, value: f64, t: f64) -> SdeResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SdeError::NumericalInstability {
            method: method.to_string(),
            reason: format!("state became non-finite ({}) after the step at t = {}", value, t),
        })
    }
}
