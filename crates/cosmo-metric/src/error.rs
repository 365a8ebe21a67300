//! Cosmology metric errors.

use crate::regime::Regime;
use cosmo_core::CosmoError;
use thiserror::Error;

/// Result type for metric operations.
pub type MetricResult<T> = Result<T, MetricError>;

/// Errors that can occur while building or evaluating a cosmology.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Density parameters are not covered by any closed-form regime.
    #[error("No regime for matter={matter}, vacuum={vacuum}: {what}")]
    Domain {
        what: &'static str,
        matter: f64,
        vacuum: f64,
    },

    /// The regime is valid but has no closed form for this quantity.
    #[error("{quantity} has no closed form in the {regime} regime")]
    Unsupported {
        quantity: &'static str,
        regime: Regime,
    },

    /// A special-function argument left its valid domain.
    #[error("Numerical domain error in {what}: argument {value}")]
    NumericalDomain { what: &'static str, value: f64 },

    /// A formula produced NaN or infinity.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Redshift must be finite and non-negative.
    #[error("Invalid redshift: {z}")]
    InvalidRedshift { z: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The elliptic integral backend rejected its input.
    #[error("Special function error: {message}")]
    SpecialFunction { message: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

impl From<CosmoError> for MetricError {
    fn from(err: CosmoError) -> Self {
        match err {
            CosmoError::OutOfDomain { what, value } => MetricError::NumericalDomain { what, value },
            CosmoError::NonFinite { what, value } => MetricError::NonFinite { what, value },
        }
    }
}
