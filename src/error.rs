// src/error.rs
use std::fmt;

/// Custom error types for the sde-path library
#[derive(Debug, Clone)]
pub enum SdeError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// A drift, diffusion, or diffusion-derivative evaluation produced a
    /// non-finite value at a grid point
    CoefficientEvaluation {
        coefficient: String,
        value: f64,
        t: f64,
        x: f64,
    },

    /// Milstein requested but the model supplies no diffusion derivative
    MissingDerivative { model: String },

    /// Numerical instability during stepping
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SdeError::CoefficientEvaluation {
                coefficient,
                value,
                t,
                x,
            } => {
                write!(
                    f,
                    "The {} coefficient evaluated to a non-finite value ({}) at t = {}, x = {}",
                    coefficient, value, t, x
                )
            }
            SdeError::MissingDerivative { model } => {
                write!(
                    f,
                    "The Milstein scheme needs the diffusion derivative, but model '{}' does not supply one",
                    model
                )
            }
            SdeError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for sde-path operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value <= 0.0 {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SdeResult<()> {
        if paths == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(SdeError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
