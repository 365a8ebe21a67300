use crate::{CosmoError, CosmoResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CosmoResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CosmoError::NonFinite { what, value: v })
    }
}

/// Square root that refuses negative radicands instead of producing NaN.
pub fn checked_sqrt(v: Real, what: &'static str) -> CosmoResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CosmoError::OutOfDomain { what, value: v });
    }
    Ok(v.sqrt())
}

/// Inverse cosine restricted to [-1, 1]. Values drifting past the ends are
/// reported, not clamped.
pub fn checked_acos(v: Real, what: &'static str) -> CosmoResult<Real> {
    let v = ensure_finite(v, what)?;
    if !(-1.0..=1.0).contains(&v) {
        return Err(CosmoError::OutOfDomain { what, value: v });
    }
    Ok(v.acos())
}

/// Inverse sine restricted to [-1, 1].
pub fn checked_asin(v: Real, what: &'static str) -> CosmoResult<Real> {
    let v = ensure_finite(v, what)?;
    if !(-1.0..=1.0).contains(&v) {
        return Err(CosmoError::OutOfDomain { what, value: v });
    }
    Ok(v.asin())
}

/// Inverse hyperbolic tangent restricted to the open interval (-1, 1).
pub fn checked_atanh(v: Real, what: &'static str) -> CosmoResult<Real> {
    let v = ensure_finite(v, what)?;
    if v <= -1.0 || v >= 1.0 {
        return Err(CosmoError::OutOfDomain { what, value: v });
    }
    Ok(v.atanh())
}
