//! Cosmological parameter set, loadable from run files.

use crate::cosmology::Cosmology;
use crate::error::MetricResult;
use crate::physical::PhysicalCosmology;

/// Hubble constant and density parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CosmologyParams {
    /// Hubble constant [km/s/Mpc]
    pub hubble: f64,
    /// Matter density parameter
    pub matter: f64,
    /// Vacuum density parameter
    pub vacuum: f64,
}

impl Default for CosmologyParams {
    fn default() -> Self {
        Self {
            hubble: 70.0,
            matter: 0.3,
            vacuum: 0.7,
        }
    }
}

impl CosmologyParams {
    pub fn new(hubble: f64, matter: f64, vacuum: f64) -> Self {
        Self {
            hubble,
            matter,
            vacuum,
        }
    }

    /// Natural-units cosmology; the Hubble constant is ignored.
    pub fn natural(&self) -> MetricResult<Cosmology> {
        Cosmology::new(self.matter, self.vacuum)
    }

    pub fn physical(&self) -> MetricResult<PhysicalCosmology> {
        PhysicalCosmology::new(self.hubble, self.matter, self.vacuum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MetricError, Regime};

    #[test]
    fn default_is_concordance() {
        let p = CosmologyParams::default();
        assert_eq!(p.natural().unwrap().regime(), Regime::FlatMixed);
        assert_eq!(p.physical().unwrap().hubble(), 70.0);
    }

    #[test]
    fn builders_propagate_errors() {
        let p = CosmologyParams::new(70.0, -0.1, 0.7);
        assert!(matches!(p.natural(), Err(MetricError::Domain { .. })));
        let p = CosmologyParams::new(0.0, 0.3, 0.7);
        assert!(matches!(p.physical(), Err(MetricError::InvalidArg { .. })));
    }
}
