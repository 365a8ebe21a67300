//! Natural-units FLRW cosmology (c = H0 = 1).

use crate::age;
use crate::curvature::{Curvature, Kappa, asinc};
use crate::error::{MetricError, MetricResult};
use crate::luminosity;
use crate::regime::{Regime, criticality};
use crate::sweep::{RedshiftSweep, SweepResult, execute_sweep};
use cosmo_core::numeric::{checked_sqrt, ensure_finite};
use std::fmt;
use tracing::debug;

/// All distance and time measures at one redshift, in natural units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distances {
    pub redshift: f64,
    /// Luminosity distance
    pub luminosity: f64,
    /// Comoving distance in the transverse direction
    pub transverse_comoving: f64,
    /// Comoving distance along the line of sight
    pub comoving: f64,
    /// Angular-diameter distance
    pub angular_diameter: f64,
    /// Comoving volume per steradian
    pub comoving_volume: f64,
    /// Age of the universe; `None` when the regime has no closed form
    pub age: Option<f64>,
    /// Look-back time; `None` when the regime has no closed form
    pub lookback_time: Option<f64>,
}

/// An FLRW universe described by its matter and vacuum densities.
///
/// The regime is fixed at construction. Every query re-evaluates the regime's
/// closed form, so the value is cheap to copy and safe to share across
/// threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cosmology {
    matter: f64,
    vacuum: f64,
    curvature: Curvature,
    crit: Option<f64>,
    regime: Regime,
}

impl Cosmology {
    /// Build a cosmology, rejecting density pairs outside every regime.
    pub fn new(matter: f64, vacuum: f64) -> MetricResult<Self> {
        let regime = Regime::classify(matter, vacuum)?;
        let curvature = Curvature::new(matter, vacuum);
        let crit = criticality(matter, vacuum);

        debug!(
            matter,
            vacuum,
            omega_k = curvature.omega_k,
            crit = crit.unwrap_or(f64::NAN),
            %regime,
            "classified cosmology"
        );

        Ok(Self {
            matter,
            vacuum,
            curvature,
            crit,
            regime,
        })
    }

    pub fn matter(&self) -> f64 {
        self.matter
    }

    pub fn vacuum(&self) -> f64 {
        self.vacuum
    }

    /// Curvature density `1 - matter - vacuum`.
    pub fn curvature_density(&self) -> f64 {
        self.curvature.omega_k
    }

    pub fn kappa(&self) -> Kappa {
        self.curvature.kappa
    }

    pub fn curvature(&self) -> &Curvature {
        &self.curvature
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// Criticality scalar, `None` for flat universes.
    pub fn criticality(&self) -> Option<f64> {
        self.crit
    }

    /// Criticality for the general branches, which can only be reached with
    /// non-zero curvature.
    pub(crate) fn require_crit(&self) -> MetricResult<f64> {
        self.crit.ok_or(MetricError::Invariant {
            what: "criticality requested for a flat cosmology",
        })
    }

    /// Luminosity distance.
    pub fn luminosity_distance(&self, z: f64) -> MetricResult<f64> {
        let z = check_redshift(z)?;
        luminosity::luminosity_distance(self, z)
    }

    /// Comoving distance in the transverse direction, `dl / (1 + z)`.
    pub fn transverse_comoving_distance(&self, z: f64) -> MetricResult<f64> {
        Ok(self.luminosity_distance(z)? / (1.0 + z))
    }

    /// Angular-diameter distance, `dl / (1 + z)^2`.
    pub fn angular_diameter_distance(&self, z: f64) -> MetricResult<f64> {
        Ok(self.luminosity_distance(z)? / ((1.0 + z) * (1.0 + z)))
    }

    /// Comoving distance along the line of sight.
    pub fn comoving_distance(&self, z: f64) -> MetricResult<f64> {
        let dm = self.transverse_comoving_distance(z)?;
        self.comoving_from_transverse(dm)
    }

    /// Comoving volume per unit solid angle out to `z`.
    pub fn comoving_volume(&self, z: f64) -> MetricResult<f64> {
        let dm = self.transverse_comoving_distance(z)?;
        let dc = self.comoving_from_transverse(dm)?;
        self.volume_from_transverse(dm, dc)
    }

    /// Age of the universe at redshift `z`.
    pub fn age(&self, z: f64) -> MetricResult<f64> {
        let z = check_redshift(z)?;
        age::age(self, z)
    }

    /// Age of the universe today.
    pub fn present_age(&self) -> MetricResult<f64> {
        age::age(self, 0.0)
    }

    /// Time elapsed between redshift `z` and today.
    pub fn lookback_time(&self, z: f64) -> MetricResult<f64> {
        let z = check_redshift(z)?;
        age::lookback_time(self, z)
    }

    /// Evaluate every measure at once. The luminosity distance is computed a
    /// single time and the rest derived from it.
    pub fn evaluate(&self, z: f64) -> MetricResult<Distances> {
        let luminosity = self.luminosity_distance(z)?;
        let transverse_comoving = luminosity / (1.0 + z);
        let angular_diameter = transverse_comoving / (1.0 + z);
        let comoving = self.comoving_from_transverse(transverse_comoving)?;
        let comoving_volume = self.volume_from_transverse(transverse_comoving, comoving)?;

        Ok(Distances {
            redshift: z,
            luminosity,
            transverse_comoving,
            comoving,
            angular_diameter,
            comoving_volume,
            age: unsupported_as_none(self.age(z))?,
            lookback_time: unsupported_as_none(self.lookback_time(z))?,
        })
    }

    /// Evaluate every point of a redshift sweep in parallel.
    pub fn sweep(&self, sweep: &RedshiftSweep) -> MetricResult<SweepResult<Distances>> {
        execute_sweep(sweep, |z| self.evaluate(z))
    }

    fn comoving_from_transverse(&self, dm: f64) -> MetricResult<f64> {
        if self.regime.is_flat() {
            return Ok(dm);
        }
        asinc(self.curvature.kappa, self.curvature.sqrt_abs, dm)
    }

    fn volume_from_transverse(&self, dm: f64, dc: f64) -> MetricResult<f64> {
        if self.regime.is_flat() {
            return Ok(dm * dm * dm / 3.0);
        }
        let ok = self.curvature.omega_k;
        let root = checked_sqrt(1.0 + ok * dm * dm, "comoving volume")?;
        let vol = (dm * root - dc) / (2.0 * ok);
        Ok(ensure_finite(vol, "comoving volume")?)
    }
}

impl fmt::Display for Cosmology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlrwNat(matter={:.6}, vacuum={:.6})",
            self.matter, self.vacuum
        )
    }
}

/// Redshift must be finite and non-negative.
pub(crate) fn check_redshift(z: f64) -> MetricResult<f64> {
    if z.is_finite() && z >= 0.0 {
        Ok(z)
    } else {
        Err(MetricError::InvalidRedshift { z })
    }
}

fn unsupported_as_none(value: MetricResult<f64>) -> MetricResult<Option<f64>> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(MetricError::Unsupported { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(1e-300)
    }

    #[test]
    fn empty_universe_closed_form() {
        let c = Cosmology::new(0.0, 0.0).unwrap();
        assert_eq!(c.luminosity_distance(1.0).unwrap(), 1.5);
        assert_eq!(c.luminosity_distance(0.0).unwrap(), 0.0);
    }

    #[test]
    fn de_sitter_closed_form() {
        let c = Cosmology::new(0.0, 1.0).unwrap();
        assert_eq!(c.luminosity_distance(1.0).unwrap(), 2.0);
        assert_eq!(c.comoving_distance(1.0).unwrap(), 1.0);
    }

    #[test]
    fn concordance_reference_values() {
        let c = Cosmology::new(0.3, 0.7).unwrap();
        assert_eq!(c.regime(), Regime::FlatMixed);
        assert!(rel_close(
            c.luminosity_distance(1.0).unwrap(),
            1.542_854_132_855_623_1,
            1e-12
        ));
        assert!(rel_close(
            c.transverse_comoving_distance(1.0).unwrap(),
            0.771_427_066_427_811_6,
            1e-12
        ));
    }

    #[test]
    fn evaluate_matches_individual_queries() {
        let c = Cosmology::new(0.3, 0.2).unwrap();
        let z = 2.0;
        let all = c.evaluate(z).unwrap();
        assert_eq!(all.luminosity, c.luminosity_distance(z).unwrap());
        assert!(rel_close(all.comoving, c.comoving_distance(z).unwrap(), 1e-14));
        assert!(rel_close(
            all.comoving_volume,
            c.comoving_volume(z).unwrap(),
            1e-14
        ));
        assert!(rel_close(
            all.angular_diameter,
            c.angular_diameter_distance(z).unwrap(),
            1e-14
        ));
        assert_eq!(all.age, None);
        assert_eq!(all.lookback_time, None);
    }

    #[test]
    fn evaluate_reports_age_when_available() {
        let c = Cosmology::new(1.0, 0.0).unwrap();
        let all = c.evaluate(3.0).unwrap();
        assert_eq!(all.age, Some(2.0 / (3.0 * 8.0)));
        let lookback = all.lookback_time.unwrap();
        assert!(rel_close(lookback, 2.0 / 3.0 - 2.0 / 24.0, 1e-14));
    }

    #[test]
    fn negative_redshift_is_rejected() {
        let c = Cosmology::new(0.3, 0.7).unwrap();
        assert!(matches!(
            c.luminosity_distance(-0.5),
            Err(MetricError::InvalidRedshift { .. })
        ));
        assert!(matches!(
            c.age(f64::NAN),
            Err(MetricError::InvalidRedshift { .. })
        ));
    }

    #[test]
    fn open_comoving_distance_uses_arcsinh() {
        let c = Cosmology::new(0.0, 0.0).unwrap();
        let z = 1.0;
        // empty universe: dc = ln(1 + z)
        assert!(rel_close(c.comoving_distance(z).unwrap(), 2.0_f64.ln(), 1e-14));
    }

    #[test]
    fn display_names_parameters() {
        let c = Cosmology::new(0.3, 0.7).unwrap();
        assert_eq!(c.to_string(), "FlrwNat(matter=0.300000, vacuum=0.700000)");
    }
}
