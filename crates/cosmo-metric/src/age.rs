//! Closed-form age and look-back time.
//!
//! Only part of the regimes have an analytic age. The general elliptic
//! families and de Sitter (which has no big bang) report
//! [`MetricError::Unsupported`].

use crate::cosmology::Cosmology;
use crate::error::{MetricError, MetricResult};
use crate::luminosity::FlatMixedTerms;
use crate::regime::Regime;
use cosmo_core::numeric::{checked_atanh, checked_sqrt, ensure_finite};

pub(crate) fn age(cosmo: &Cosmology, z: f64) -> MetricResult<f64> {
    let zp1 = 1.0 + z;
    let t = match cosmo.regime() {
        Regime::Empty => 1.0 / zp1,
        Regime::FlatMatterOnly => 2.0 / (3.0 * zp1 * zp1.sqrt()),
        Regime::MatterOnlyUnderdense => matter_only_open(cosmo.matter(), z)?,
        Regime::MatterOnlyOverdense => matter_only_closed(cosmo.matter(), z)?,
        Regime::VacuumOnlyNonFlat => vacuum_only(cosmo.vacuum(), z)?,
        Regime::FlatMixed => flat_mixed(cosmo.matter(), cosmo.vacuum(), z)?,
        regime @ (Regime::FlatVacuumOnly
        | Regime::EllipticA
        | Regime::EllipticB
        | Regime::EllipticBDegenerate) => {
            return Err(MetricError::Unsupported {
                quantity: "age",
                regime,
            });
        }
    };
    Ok(ensure_finite(t, "age")?)
}

pub(crate) fn lookback_time(cosmo: &Cosmology, z: f64) -> MetricResult<f64> {
    let regime = cosmo.regime();
    if !regime.has_closed_form_lookback() {
        return Err(MetricError::Unsupported {
            quantity: "look-back time",
            regime,
        });
    }
    match regime {
        // de Sitter: H is constant, so t0 - t = ln(1 + z)
        Regime::FlatVacuumOnly => Ok(z.ln_1p()),
        _ => Ok(age(cosmo, 0.0)? - age(cosmo, z)?),
    }
}

fn matter_only_open(om: f64, z: f64) -> MetricResult<f64> {
    let pre0 = 1.0 - om;
    let prez = checked_sqrt(1.0 + om * z, "matter-only expansion factor")?;
    let sq0 = pre0.sqrt();
    let hyperbolic = checked_atanh(sq0 / prez, "underdense age")?;
    Ok((prez / (1.0 + z) - om / sq0 * hyperbolic) / pre0)
}

fn matter_only_closed(om: f64, z: f64) -> MetricResult<f64> {
    let pre0 = 1.0 - om;
    let prez = checked_sqrt(1.0 + om * z, "matter-only expansion factor")?;
    let sq0 = (-pre0).sqrt();
    Ok((prez / (1.0 + z) - om / sq0 * (sq0 / prez).atan()) / pre0)
}

fn vacuum_only(ov: f64, z: f64) -> MetricResult<f64> {
    let scale = checked_sqrt(1.0 / ov - 1.0, "vacuum-only age")?;
    Ok((1.0 / ((1.0 + z) * scale)).asinh() / ov.sqrt())
}

fn flat_mixed(om: f64, ov: f64, z: f64) -> MetricResult<f64> {
    let terms = FlatMixedTerms::new(om);
    let r = terms.arg0 / (1.0 + z);
    let ratio = checked_sqrt(r * r * r, "flat matter+vacuum age")?;
    let sqrt_ov = checked_sqrt(ov, "flat matter+vacuum vacuum density")?;
    Ok(2.0 / (3.0 * sqrt_ov) * ratio.asinh())
}
