//! Physical-units cosmology.
//!
//! Wraps a natural-units [`Cosmology`] and scales its results by the Hubble
//! radius `c / H0` and the Hubble time `1 / H0`. Quantities are returned as
//! `uom` values; the `*_mpc`/`*_gyr` accessors on [`PhysicalDistances`] give
//! plain numbers in the customary astronomical units.

use crate::cosmology::{Cosmology, Distances};
use crate::error::{MetricError, MetricResult};
use crate::regime::Regime;
use crate::sweep::{RedshiftSweep, SweepResult, execute_sweep};
use cosmo_core::units::constants::{
    HUBBLE_TIME_GYR, PC_PER_MPC, RAD_PER_ARCSEC, SPEED_OF_LIGHT_KM_S,
};
use cosmo_core::units::{Length, Time, Volume, gyr, mpc, mpc3, to_gyr, to_mpc, to_mpc3};
use std::fmt;

/// FLRW cosmology with a Hubble constant in km/s/Mpc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalCosmology {
    hubble: f64,
    natural: Cosmology,
    hubble_radius_mpc: f64,
    hubble_time_gyr: f64,
}

impl PhysicalCosmology {
    pub fn new(hubble: f64, matter: f64, vacuum: f64) -> MetricResult<Self> {
        if !hubble.is_finite() || hubble <= 0.0 {
            return Err(MetricError::InvalidArg {
                what: "Hubble constant must be finite and positive",
            });
        }
        let natural = Cosmology::new(matter, vacuum)?;
        Ok(Self {
            hubble,
            natural,
            hubble_radius_mpc: SPEED_OF_LIGHT_KM_S / hubble,
            hubble_time_gyr: HUBBLE_TIME_GYR / hubble,
        })
    }

    /// Hubble constant [km/s/Mpc].
    pub fn hubble(&self) -> f64 {
        self.hubble
    }

    pub fn matter(&self) -> f64 {
        self.natural.matter()
    }

    pub fn vacuum(&self) -> f64 {
        self.natural.vacuum()
    }

    pub fn regime(&self) -> Regime {
        self.natural.regime()
    }

    /// Underlying dimensionless cosmology.
    pub fn natural(&self) -> &Cosmology {
        &self.natural
    }

    pub fn hubble_radius(&self) -> Length {
        mpc(self.hubble_radius_mpc)
    }

    pub fn hubble_time(&self) -> Time {
        gyr(self.hubble_time_gyr)
    }

    pub fn luminosity_distance(&self, z: f64) -> MetricResult<Length> {
        Ok(mpc(self.natural.luminosity_distance(z)? * self.hubble_radius_mpc))
    }

    pub fn transverse_comoving_distance(&self, z: f64) -> MetricResult<Length> {
        Ok(mpc(
            self.natural.transverse_comoving_distance(z)? * self.hubble_radius_mpc,
        ))
    }

    pub fn angular_diameter_distance(&self, z: f64) -> MetricResult<Length> {
        Ok(mpc(
            self.natural.angular_diameter_distance(z)? * self.hubble_radius_mpc,
        ))
    }

    pub fn comoving_distance(&self, z: f64) -> MetricResult<Length> {
        Ok(mpc(self.natural.comoving_distance(z)? * self.hubble_radius_mpc))
    }

    /// Comoving volume per steradian.
    pub fn comoving_volume(&self, z: f64) -> MetricResult<Volume> {
        Ok(mpc3(self.natural.comoving_volume(z)? * self.volume_scale()))
    }

    pub fn age(&self, z: f64) -> MetricResult<Time> {
        Ok(gyr(self.natural.age(z)? * self.hubble_time_gyr))
    }

    pub fn present_age(&self) -> MetricResult<Time> {
        Ok(gyr(self.natural.present_age()? * self.hubble_time_gyr))
    }

    pub fn lookback_time(&self, z: f64) -> MetricResult<Time> {
        Ok(gyr(self.natural.lookback_time(z)? * self.hubble_time_gyr))
    }

    /// Proper transverse size subtended by one arcsecond [pc/arcsec].
    pub fn angular_scale(&self, z: f64) -> MetricResult<f64> {
        let da = to_mpc(self.angular_diameter_distance(z)?);
        Ok(da * PC_PER_MPC * RAD_PER_ARCSEC)
    }

    pub fn evaluate(&self, z: f64) -> MetricResult<PhysicalDistances> {
        let natural = self.natural.evaluate(z)?;
        Ok(self.scale(&natural))
    }

    /// Evaluate every point of a redshift sweep in parallel.
    pub fn sweep(&self, sweep: &RedshiftSweep) -> MetricResult<SweepResult<PhysicalDistances>> {
        execute_sweep(sweep, |z| self.evaluate(z))
    }

    fn volume_scale(&self) -> f64 {
        let r = self.hubble_radius_mpc;
        r * r * r
    }

    fn scale(&self, d: &Distances) -> PhysicalDistances {
        let r = self.hubble_radius_mpc;
        let t = self.hubble_time_gyr;
        PhysicalDistances {
            redshift: d.redshift,
            luminosity: mpc(d.luminosity * r),
            transverse_comoving: mpc(d.transverse_comoving * r),
            comoving: mpc(d.comoving * r),
            angular_diameter: mpc(d.angular_diameter * r),
            comoving_volume: mpc3(d.comoving_volume * self.volume_scale()),
            angular_scale: d.angular_diameter * r * PC_PER_MPC * RAD_PER_ARCSEC,
            age: d.age.map(|a| gyr(a * t)),
            lookback_time: d.lookback_time.map(|lt| gyr(lt * t)),
        }
    }
}

impl fmt::Display for PhysicalCosmology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flrw(hubble={:.2}, matter={:.6}, vacuum={:.6})",
            self.hubble,
            self.matter(),
            self.vacuum()
        )
    }
}

/// All measures at one redshift, in physical units.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalDistances {
    pub redshift: f64,
    pub luminosity: Length,
    pub transverse_comoving: Length,
    pub comoving: Length,
    pub angular_diameter: Length,
    pub comoving_volume: Volume,
    /// [pc/arcsec]
    pub angular_scale: f64,
    pub age: Option<Time>,
    pub lookback_time: Option<Time>,
}

impl PhysicalDistances {
    pub fn luminosity_mpc(&self) -> f64 {
        to_mpc(self.luminosity)
    }

    pub fn transverse_comoving_mpc(&self) -> f64 {
        to_mpc(self.transverse_comoving)
    }

    pub fn comoving_mpc(&self) -> f64 {
        to_mpc(self.comoving)
    }

    pub fn angular_diameter_mpc(&self) -> f64 {
        to_mpc(self.angular_diameter)
    }

    pub fn comoving_volume_mpc3(&self) -> f64 {
        to_mpc3(self.comoving_volume)
    }

    pub fn age_gyr(&self) -> Option<f64> {
        self.age.map(to_gyr)
    }

    pub fn lookback_time_gyr(&self) -> Option<f64> {
        self.lookback_time.map(to_gyr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    fn concordance() -> PhysicalCosmology {
        PhysicalCosmology::new(70.0, 0.3, 0.7).unwrap()
    }

    #[test]
    fn rejects_bad_hubble_constant() {
        for h in [0.0, -70.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PhysicalCosmology::new(h, 0.3, 0.7),
                Err(MetricError::InvalidArg { .. })
            ));
        }
    }

    #[test]
    fn concordance_luminosity_distance() {
        let c = concordance();
        let dl = to_mpc(c.luminosity_distance(1.0).unwrap());
        assert!(rel_close(dl, 6607.657_611_774_935, 1e-9));
    }

    #[test]
    fn concordance_age() {
        let c = concordance();
        let t0 = to_gyr(c.present_age().unwrap());
        assert!(rel_close(t0, 13.466_98, 1e-5));
    }

    #[test]
    fn evaluate_agrees_with_individual_queries() {
        let c = concordance();
        let z = 2.0;
        let all = c.evaluate(z).unwrap();
        assert!(rel_close(
            all.comoving_mpc(),
            to_mpc(c.comoving_distance(z).unwrap()),
            1e-12
        ));
        assert!(rel_close(
            all.comoving_volume_mpc3(),
            to_mpc3(c.comoving_volume(z).unwrap()),
            1e-12
        ));
        assert!(rel_close(all.angular_scale, c.angular_scale(z).unwrap(), 1e-12));
        let lookback = all.lookback_time_gyr().unwrap();
        assert!(rel_close(
            lookback,
            to_gyr(c.lookback_time(z).unwrap()),
            1e-12
        ));
    }

    #[test]
    fn angular_scale_from_angular_diameter_distance() {
        let c = concordance();
        let da = to_mpc(c.angular_diameter_distance(1.0).unwrap());
        let expected = da * 1.0e6 * std::f64::consts::PI / (180.0 * 3600.0);
        assert!(rel_close(c.angular_scale(1.0).unwrap(), expected, 1e-12));
    }

    #[test]
    fn hubble_scales() {
        let c = PhysicalCosmology::new(100.0, 0.0, 0.0).unwrap();
        assert!(rel_close(to_mpc(c.hubble_radius()), 2997.924_58, 1e-12));
        assert!(rel_close(to_gyr(c.hubble_time()), 9.777_922_22, 1e-12));
        // empty universe: age = Hubble time
        assert!(rel_close(to_gyr(c.present_age().unwrap()), 9.777_922_22, 1e-12));
    }

    #[test]
    fn unsupported_age_passes_through() {
        let c = PhysicalCosmology::new(70.0, 0.3, 0.2).unwrap();
        assert!(matches!(c.age(1.0), Err(MetricError::Unsupported { .. })));
        assert_eq!(c.evaluate(1.0).unwrap().age_gyr(), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            concordance().to_string(),
            "Flrw(hubble=70.00, matter=0.300000, vacuum=0.700000)"
        );
    }
}
