// cosmo-core/src/units.rs

use uom::si::f64::{Length as UomLength, Time as UomTime, Volume as UomVolume};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Time = UomTime;
pub type Volume = UomVolume;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Length from megaparsecs.
#[inline]
pub fn mpc(v: f64) -> Length {
    m(v * constants::METERS_PER_MPC)
}

/// Volume from cubic megaparsecs.
#[inline]
pub fn mpc3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    let m_per_mpc = constants::METERS_PER_MPC;
    Volume::new::<cubic_meter>(v * m_per_mpc * m_per_mpc * m_per_mpc)
}

/// Time from gigayears (Julian years).
#[inline]
pub fn gyr(v: f64) -> Time {
    s(v * constants::SECONDS_PER_GYR)
}

#[inline]
pub fn to_mpc(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>() / constants::METERS_PER_MPC
}

#[inline]
pub fn to_mpc3(v: Volume) -> f64 {
    use uom::si::volume::cubic_meter;
    let m_per_mpc = constants::METERS_PER_MPC;
    v.get::<cubic_meter>() / (m_per_mpc * m_per_mpc * m_per_mpc)
}

#[inline]
pub fn to_gyr(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>() / constants::SECONDS_PER_GYR
}

pub mod constants {
    /// Speed of light [km/s]
    pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

    /// Hubble time in Gyr for H0 = 1 km/s/Mpc.
    pub const HUBBLE_TIME_GYR: f64 = 977.792_222;

    /// One megaparsec [m] (IAU 2015 parsec).
    pub const METERS_PER_MPC: f64 = 3.085_677_581_491_367e22;

    /// One gigayear of Julian years [s].
    pub const SECONDS_PER_GYR: f64 = 3.155_76e16;

    /// Parsecs per megaparsec.
    pub const PC_PER_MPC: f64 = 1.0e6;

    /// Radians in one arcsecond.
    pub const RAD_PER_ARCSEC: f64 = std::f64::consts::PI / (180.0 * 3600.0);
}
