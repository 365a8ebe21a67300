//! Closed-form luminosity distance for every regime.
//!
//! All values are dimensionless (c = H0 = 1). The other distance measures
//! are derived from these in [`crate::cosmology`].

use crate::cosmology::Cosmology;
use crate::curvature::{Kappa, sinc};
use crate::elliptic::incomplete_first_kind;
use crate::error::{MetricError, MetricResult};
use crate::regime::Regime;
use cosmo_core::numeric::{checked_acos, checked_asin, checked_sqrt, ensure_finite};

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Elliptic parameter of the flat matter+vacuum solution, `sin^2(75 deg)`.
const FLAT_MIXED_PARAMETER: f64 = 0.5 + 0.25 * SQRT_3;

pub(crate) fn luminosity_distance(cosmo: &Cosmology, z: f64) -> MetricResult<f64> {
    let dl = match cosmo.regime() {
        Regime::Empty => 0.5 * z * (z + 2.0),
        Regime::FlatMatterOnly | Regime::MatterOnlyUnderdense | Regime::MatterOnlyOverdense => {
            matter_only(cosmo.matter(), z)?
        }
        Regime::FlatVacuumOnly => z * (z + 1.0),
        Regime::VacuumOnlyNonFlat => vacuum_only(cosmo.vacuum(), z)?,
        Regime::FlatMixed => flat_mixed(cosmo.matter(), z)?,
        Regime::EllipticA => elliptic_a(cosmo, z)?,
        Regime::EllipticB | Regime::EllipticBDegenerate => elliptic_b(cosmo, z)?,
    };
    Ok(ensure_finite(dl, "luminosity distance")?)
}

/// Mattig's relation, valid for any matter > 0 without vacuum.
fn matter_only(om: f64, z: f64) -> MetricResult<f64> {
    let root = checked_sqrt(1.0 + om * z, "matter-only expansion factor")?;
    Ok(2.0 * (2.0 - om * (1.0 - z) - (2.0 - om) * root) / (om * om))
}

fn vacuum_only(ov: f64, z: f64) -> MetricResult<f64> {
    // ov + (1 - ov)(1 + z)^2, expanded so the radicand is exactly 1 at z = 0
    let radicand = 1.0 + (1.0 - ov) * z * (z + 2.0);
    let root = checked_sqrt(radicand, "vacuum-only expansion factor")?;
    Ok((1.0 + z) / ov * (1.0 + z - root))
}

/// Parameters of the flat matter+vacuum solution that do not depend on z.
pub(crate) struct FlatMixedTerms {
    /// Real cube root of `1/matter - 1`
    pub arg0: f64,
    up: f64,
    down: f64,
}

impl FlatMixedTerms {
    pub(crate) fn new(om: f64) -> Self {
        let arg0 = (1.0 / om - 1.0).cbrt();
        Self {
            arg0,
            up: 1.0 + (1.0 - SQRT_3) * arg0,
            down: 1.0 + (1.0 + SQRT_3) * arg0,
        }
    }

    fn amplitude(&self, z: f64) -> MetricResult<f64> {
        Ok(checked_acos(
            (z + self.up) / (z + self.down),
            "flat matter+vacuum amplitude",
        )?)
    }
}

fn flat_mixed(om: f64, z: f64) -> MetricResult<f64> {
    let terms = FlatMixedTerms::new(om);
    let factor = checked_sqrt(SQRT_3 * om * terms.arg0, "flat matter+vacuum scale")?;
    let phi0 = terms.amplitude(0.0)?;
    let phi = terms.amplitude(z)?;
    let m = FLAT_MIXED_PARAMETER;
    let span = incomplete_first_kind(phi0, m)? - incomplete_first_kind(phi, m)?;
    Ok((1.0 + z) / factor * span)
}

/// One real root of the governing cubic (crit <= 0 or crit >= 2).
fn elliptic_a(cosmo: &Cosmology, z: f64) -> MetricResult<f64> {
    let crit = cosmo.require_crit()?;
    let curvature = cosmo.curvature();
    let kap = curvature.kappa.sign();

    let disc = checked_sqrt(crit * (crit - 2.0), "type A discriminant")?;
    let v = (kap * (crit - 1.0) + disc).cbrt();
    let v_sum = v + 1.0 / v;
    let y = (-1.0 + kap * v_sum) / 3.0;
    let a = checked_sqrt(y * (3.0 * y + 2.0), "type A root spacing")?;
    let g = 1.0 / checked_sqrt(a, "type A scale")?;
    let m = 0.5 + 0.25 * g * g * v_sum;
    let sup = cosmo.matter() / curvature.omega_k.abs();

    let amplitude = |scale: f64| -> MetricResult<f64> {
        let base = scale * sup + kap * y;
        Ok(checked_acos((base - a) / (base + a), "type A amplitude")?)
    };
    let phi0 = amplitude(1.0)?;
    let phi = amplitude(1.0 + z)?;

    let arg = g * (incomplete_first_kind(phi0, m)? - incomplete_first_kind(phi, m)?);
    Ok((1.0 + z) / curvature.sqrt_abs * sinc(curvature.kappa, 1.0, arg))
}

/// Three real roots of the governing cubic (0 < crit <= 2).
fn elliptic_b(cosmo: &Cosmology, z: f64) -> MetricResult<f64> {
    let crit = cosmo.require_crit()?;
    let curvature = cosmo.curvature();
    if curvature.kappa != Kappa::Closed {
        return Err(MetricError::Invariant {
            what: "type B solution reached with open geometry",
        });
    }

    let theta = checked_acos(1.0 - crit, "type B root angle")? / 3.0;
    let (sin_t, cos_t) = theta.sin_cos();
    let y1 = (-1.0 + cos_t + SQRT_3 * sin_t) / 3.0;
    let y2 = (-1.0 - 2.0 * cos_t) / 3.0;
    let y3 = (-1.0 + cos_t - SQRT_3 * sin_t) / 3.0;

    let spread = y1 - y2;
    let g = 2.0 / checked_sqrt(spread, "type B root spread")?;
    let m = (y1 - y3) / spread;
    let sup = cosmo.matter() / curvature.omega_k.abs();

    let amplitude = |scale: f64| -> MetricResult<f64> {
        let ratio = checked_sqrt(spread / (scale * sup + y1), "type B amplitude ratio")?;
        Ok(checked_asin(ratio, "type B amplitude")?)
    };
    let phi0 = amplitude(1.0)?;
    let phi = amplitude(1.0 + z)?;

    let arg = g * (incomplete_first_kind(phi0, m)? - incomplete_first_kind(phi, m)?);
    Ok((1.0 + z) / curvature.sqrt_abs * arg.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dl(matter: f64, vacuum: f64, z: f64) -> f64 {
        Cosmology::new(matter, vacuum)
            .unwrap()
            .luminosity_distance(z)
            .unwrap()
    }

    fn rel_close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    #[test]
    fn einstein_de_sitter_matches_direct_form() {
        for &z in &[0.1_f64, 1.0, 3.0] {
            let expected: f64 = 2.0 * (1.0 + z - (1.0 + z).sqrt());
            assert!(rel_close(dl(1.0, 0.0, z), expected, 1e-14));
        }
        assert_eq!(dl(1.0, 0.0, 3.0), 4.0);
    }

    #[test]
    fn matter_only_values() {
        // reference values from direct quadrature of the Friedmann equation
        assert!(rel_close(dl(0.5, 0.0, 1.0), 1.303_061_54, 1e-8));
        assert!(rel_close(dl(1.5, 0.0, 1.0), 1.075_049_41, 1e-8));
    }

    #[test]
    fn vacuum_only_values() {
        assert!(rel_close(dl(0.0, 0.5, 1.0), 1.675_444_68, 1e-8));
        assert!(rel_close(dl(0.0, 0.5, 3.0), 8.676_192_42, 1e-8));
        assert_eq!(dl(0.0, 0.5, 0.0), 0.0);
    }

    #[test]
    fn flat_mixed_values() {
        assert!(rel_close(dl(0.3, 0.7, 0.1), 0.107_477_67, 1e-7));
        assert!(rel_close(dl(0.3, 0.7, 3.0), 5.936_079_69, 1e-8));
        assert_eq!(dl(0.3, 0.7, 0.0), 0.0);
    }

    #[test]
    fn flat_mixed_with_rounding_residue_matches_quadrature() {
        // 1 - 0.7 - 0.3 is 5.6e-17, not zero
        let c = Cosmology::new(0.7, 0.3).unwrap();
        assert_eq!(c.regime(), Regime::FlatMixed);
        assert_eq!(c.curvature_density(), 0.0);
        assert!(rel_close(dl(0.7, 0.3, 1.0), 1.287_098_276_320_747, 1e-10));
        assert!(rel_close(dl(0.32, 0.68, 1.0), 1.524_962_414_703_982_6, 1e-10));
    }

    #[test]
    fn flat_mixed_low_matter_amplitude_past_quarter_period() {
        // up < 0 here, so the z = 0 amplitude exceeds pi/2
        let terms = FlatMixedTerms::new(0.2);
        assert!(terms.amplitude(0.0).unwrap() > std::f64::consts::FRAC_PI_2);
        assert!(dl(0.2, 0.8, 1.0) > dl(0.3, 0.7, 1.0));
    }

    #[test]
    fn elliptic_a_open_and_closed() {
        assert!(rel_close(dl(0.3, 0.2, 1.0), 1.412_681_06, 1e-8));
        assert!(rel_close(dl(0.3, 0.8, 1.0), 1.575_181_76, 1e-8));
        assert!(rel_close(dl(0.5, 0.6, 3.0), 5.058_604_55, 1e-8));
    }

    #[test]
    fn elliptic_b_values() {
        assert!(rel_close(dl(1.5, 0.007, 1.0), 1.075_556_006_564_737, 1e-10));
        assert!(rel_close(dl(2.0, 0.01, 3.0), 2.998_565_141_083_623, 1e-10));
    }

    #[test]
    fn elliptic_b_degenerate_values() {
        let vacuum = 0.008_665_856_025_717_98;
        assert_eq!(
            Cosmology::new(1.5, vacuum).unwrap().regime(),
            Regime::EllipticBDegenerate
        );
        assert!(rel_close(dl(1.5, vacuum, 1.0), 1.075_676_652_815_319_7, 1e-10));
        assert_eq!(dl(1.5, vacuum, 0.0), 0.0);
    }

    #[test]
    fn loitering_universe_surfaces_numerical_domain_error() {
        // crit == 2 with a large vacuum term: no big bang, the arcsine
        // argument exceeds one
        let c = Cosmology::new(0.3, 1.713_460_402_873_455_5).unwrap();
        let err = c.luminosity_distance(0.5).unwrap_err();
        assert!(matches!(err, MetricError::NumericalDomain { .. }));
    }
}
