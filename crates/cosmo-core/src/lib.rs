//! cosmo-core: stable foundation for the cosmology workspace.
//!
//! Contains:
//! - units (uom SI types + astronomical constructors)
//! - numeric (Real + tolerances + checked float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CosmoError, CosmoResult};
pub use numeric::*;
pub use units::*;
