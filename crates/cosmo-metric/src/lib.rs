//! cosmo-metric: closed-form FLRW distances and times.
//!
//! Provides:
//! - Regime classification of the (matter, vacuum) density plane
//! - Analytic luminosity distance for every regime, with the derived
//!   transverse, line-of-sight and angular-diameter distances
//! - Comoving volume per steradian
//! - Age of the universe and look-back time where closed forms exist
//! - A physical-units wrapper scaled by the Hubble constant
//! - Parallel redshift sweeps
//!
//! # Architecture
//!
//! [`Cosmology`] works in natural units (c = H0 = 1). Its regime is fixed at
//! construction and each query dispatches to that regime's formula, so no
//! numerical integration is performed. [`PhysicalCosmology`] wraps it and
//! returns `uom` quantities.
//!
//! # Example
//!
//! ```
//! use cosmo_metric::{PhysicalCosmology, Regime};
//! use cosmo_core::units::to_mpc;
//!
//! let cosmo = PhysicalCosmology::new(70.0, 0.3, 0.7).unwrap();
//! assert_eq!(cosmo.regime(), Regime::FlatMixed);
//!
//! let dl = to_mpc(cosmo.luminosity_distance(1.0).unwrap());
//! assert!((dl - 6607.66).abs() < 0.01);
//! ```

mod age;
pub mod cosmology;
pub mod curvature;
pub mod elliptic;
pub mod error;
mod luminosity;
pub mod params;
pub mod physical;
pub mod regime;
pub mod sweep;

pub use cosmology::{Cosmology, Distances};
pub use curvature::{Curvature, Kappa};
pub use error::{MetricError, MetricResult};
pub use params::CosmologyParams;
pub use physical::{PhysicalCosmology, PhysicalDistances};
pub use regime::Regime;
pub use sweep::{RedshiftSweep, Spacing, SweepResult, execute_sweep};
