//! Incomplete elliptic integral of the first kind.
//!
//! Thin adapter over the `ellip` crate. Arguments follow the Legendre form
//! with the *parameter* convention `F(phi | m)`, `m = k^2`.

use crate::error::{MetricError, MetricResult};
use cosmo_core::numeric::ensure_finite;
use std::f64::consts::{FRAC_PI_2, PI};

/// Compute `F(phi | m)` for any real amplitude.
///
/// Amplitudes outside [-pi/2, pi/2] are reduced with
/// `F(phi + n pi) = F(phi) + 2 n K(m)` before calling the backend.
pub fn incomplete_first_kind(phi: f64, m: f64) -> MetricResult<f64> {
    ensure_finite(phi, "elliptic amplitude")?;
    ensure_finite(m, "elliptic parameter")?;

    if phi.abs() <= FRAC_PI_2 {
        return reduced(phi, m);
    }

    let n = (phi / PI).round();
    let rest = phi - n * PI;
    let value = 2.0 * n * complete_first_kind(m)? + reduced(rest, m)?;
    Ok(ensure_finite(value, "elliptic integral F(phi|m)")?)
}

/// Complete integral `K(m) = F(pi/2 | m)`.
pub fn complete_first_kind(m: f64) -> MetricResult<f64> {
    ensure_finite(m, "elliptic parameter")?;
    let value = ellip::ellipk(m).map_err(|err| MetricError::SpecialFunction {
        message: format!("K(m={m}): {err:?}"),
    })?;
    Ok(ensure_finite(value, "elliptic integral K(m)")?)
}

fn reduced(phi: f64, m: f64) -> MetricResult<f64> {
    let value = ellip::ellipf(phi, m).map_err(|err| MetricError::SpecialFunction {
        message: format!("F(phi={phi}, m={m}): {err:?}"),
    })?;
    Ok(ensure_finite(value, "elliptic integral F(phi|m)")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn zero_amplitude_is_zero() {
        assert_eq!(incomplete_first_kind(0.0, 0.7).unwrap(), 0.0);
    }

    #[test]
    fn zero_parameter_is_identity() {
        let phi = 0.9;
        assert!(close(incomplete_first_kind(phi, 0.0).unwrap(), phi, 1e-14));
    }

    #[test]
    fn known_values() {
        assert!(close(complete_first_kind(0.5).unwrap(), 1.854_074_677_301_372, 1e-13));
        assert!(close(
            incomplete_first_kind(0.5, 0.3).unwrap(),
            0.506_140_211_962_355_3,
            1e-13
        ));
        assert!(close(
            incomplete_first_kind(-0.7, 0.4).unwrap(),
            -0.722_505_363_866_968_5,
            1e-13
        ));
    }

    #[test]
    fn unit_parameter_matches_inverse_gudermannian() {
        let phi: f64 = 1.0;
        let expected = phi.sin().atanh();
        assert!(close(incomplete_first_kind(phi, 1.0).unwrap(), expected, 1e-12));
    }

    #[test]
    fn amplitude_beyond_quarter_period() {
        assert!(close(
            incomplete_first_kind(2.0, 0.9).unwrap(),
            3.711_443_226_464_717,
            1e-12
        ));
        assert!(close(
            incomplete_first_kind(3.5, 0.5).unwrap(),
            4.070_404_266_410_484,
            1e-12
        ));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(matches!(
            incomplete_first_kind(f64::NAN, 0.5),
            Err(MetricError::NonFinite { .. })
        ));
    }
}
