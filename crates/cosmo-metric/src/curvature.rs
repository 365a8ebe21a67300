//! Spatial curvature helpers.

use crate::error::MetricResult;
use crate::regime::{curvature_density, is_flat_pair};
use cosmo_core::numeric::checked_asin;

/// Sign of the spatial curvature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kappa {
    /// omega_k > 0, hyperbolic sections
    Open,
    /// omega_k <= 0, spherical sections
    Closed,
}

impl Kappa {
    pub fn from_omega_k(omega_k: f64) -> Self {
        if omega_k > 0.0 {
            Kappa::Open
        } else {
            Kappa::Closed
        }
    }

    /// -1 for open, +1 for closed.
    pub fn sign(self) -> f64 {
        match self {
            Kappa::Open => -1.0,
            Kappa::Closed => 1.0,
        }
    }
}

/// Curvature constants derived once per cosmology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curvature {
    pub omega_k: f64,
    pub kappa: Kappa,
    /// sqrt(|omega_k|)
    pub sqrt_abs: f64,
}

impl Curvature {
    /// Flat pairs get `omega_k = 0` exactly, even when the subtraction
    /// leaves a rounding residue.
    pub fn new(matter: f64, vacuum: f64) -> Self {
        let omega_k = if is_flat_pair(matter, vacuum) {
            0.0
        } else {
            curvature_density(matter, vacuum)
        };
        Self {
            omega_k,
            kappa: Kappa::from_omega_k(omega_k),
            sqrt_abs: omega_k.abs().sqrt(),
        }
    }

    pub fn is_flat(&self) -> bool {
        self.omega_k == 0.0
    }
}

/// Curvature-dependent sine analogue: `sin(a x)/a`, `sinh(a x)/a`, or `x`
/// when the scale vanishes.
pub fn sinc(kappa: Kappa, a: f64, x: f64) -> f64 {
    if a == 0.0 {
        return x;
    }
    match kappa {
        Kappa::Closed => (a * x).sin() / a,
        Kappa::Open => (a * x).sinh() / a,
    }
}

/// Inverse of [`sinc`]. The closed branch fails when `a x` leaves [-1, 1].
pub fn asinc(kappa: Kappa, a: f64, x: f64) -> MetricResult<f64> {
    if a == 0.0 {
        return Ok(x);
    }
    match kappa {
        Kappa::Closed => Ok(checked_asin(a * x, "inverse curvature sine")? / a),
        Kappa::Open => Ok((a * x).asinh() / a),
    }
}
