//! Closed-form regime selection.
//!
//! The (matter, vacuum) plane splits into ten families, each with its own
//! analytic solution of the Friedmann equation. Boundaries are compared with
//! exact floating-point equality: a pair that lands on `matter + vacuum == 1`
//! or `crit == 2` selects a different formula family than a neighbour one ulp
//! away. Tolerance-based matching would change which branch runs, so none is
//! applied here.

use crate::error::{MetricError, MetricResult};
use std::fmt;

/// Analytic family a cosmology belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Regime {
    /// matter = vacuum = 0 (Milne universe)
    Empty,
    /// matter = 1, vacuum = 0 (Einstein-de Sitter)
    FlatMatterOnly,
    /// 0 < matter < 1, vacuum = 0
    MatterOnlyUnderdense,
    /// matter > 1, vacuum = 0
    MatterOnlyOverdense,
    /// matter = 0, vacuum = 1 (de Sitter)
    FlatVacuumOnly,
    /// matter = 0, 0 < vacuum < 1
    VacuumOnlyNonFlat,
    /// matter + vacuum = 1 with both components present
    FlatMixed,
    /// crit < 0 or crit > 2
    EllipticA,
    /// crit = 2, closed geometry
    EllipticBDegenerate,
    /// 0 < crit < 2, closed geometry
    EllipticB,
}

impl Regime {
    /// Classify a density pair. First match wins.
    pub fn classify(matter: f64, vacuum: f64) -> MetricResult<Self> {
        if !matter.is_finite() || !vacuum.is_finite() {
            return Err(MetricError::Domain {
                what: "density parameters must be finite",
                matter,
                vacuum,
            });
        }
        if matter < 0.0 {
            return Err(MetricError::Domain {
                what: "matter density must be non-negative",
                matter,
                vacuum,
            });
        }

        if matter == 0.0 && vacuum == 0.0 {
            return Ok(Regime::Empty);
        }

        if vacuum == 0.0 {
            return Ok(if matter == 1.0 {
                Regime::FlatMatterOnly
            } else if matter < 1.0 {
                Regime::MatterOnlyUnderdense
            } else {
                Regime::MatterOnlyOverdense
            });
        }

        if matter == 0.0 {
            if vacuum == 1.0 {
                return Ok(Regime::FlatVacuumOnly);
            }
            if vacuum > 0.0 && vacuum < 1.0 {
                return Ok(Regime::VacuumOnlyNonFlat);
            }
            return Err(MetricError::Domain {
                what: "vacuum-only universe requires 0 < vacuum <= 1",
                matter,
                vacuum,
            });
        }

        let Some(crit) = criticality(matter, vacuum) else {
            return Ok(Regime::FlatMixed);
        };

        if crit > 0.0 && crit <= 2.0 {
            // three real roots only yield a closed form on closed geometry
            if curvature_density(matter, vacuum) > 0.0 {
                return Err(MetricError::Domain {
                    what: "open universe with negative vacuum and 0 < crit <= 2",
                    matter,
                    vacuum,
                });
            }
            Ok(if crit == 2.0 {
                Regime::EllipticBDegenerate
            } else {
                Regime::EllipticB
            })
        } else if crit < 0.0 || crit > 2.0 {
            Ok(Regime::EllipticA)
        } else {
            Err(MetricError::Domain {
                what: "criticality is not a number",
                matter,
                vacuum,
            })
        }
    }

    /// True for the spatially flat families (comoving distance equals the
    /// transverse one).
    pub fn is_flat(self) -> bool {
        matches!(
            self,
            Regime::FlatMatterOnly | Regime::FlatVacuumOnly | Regime::FlatMixed
        )
    }

    /// True when the age of the universe has a closed form here.
    pub fn has_closed_form_age(self) -> bool {
        matches!(
            self,
            Regime::Empty
                | Regime::FlatMatterOnly
                | Regime::MatterOnlyUnderdense
                | Regime::MatterOnlyOverdense
                | Regime::VacuumOnlyNonFlat
                | Regime::FlatMixed
        )
    }

    /// True when look-back time has a closed form here.
    pub fn has_closed_form_lookback(self) -> bool {
        self.has_closed_form_age() || self == Regime::FlatVacuumOnly
    }

    pub fn label(self) -> &'static str {
        match self {
            Regime::Empty => "empty",
            Regime::FlatMatterOnly => "flat matter-only",
            Regime::MatterOnlyUnderdense => "underdense matter-only",
            Regime::MatterOnlyOverdense => "overdense matter-only",
            Regime::FlatVacuumOnly => "flat vacuum-only",
            Regime::VacuumOnlyNonFlat => "non-flat vacuum-only",
            Regime::FlatMixed => "flat matter+vacuum",
            Regime::EllipticA => "elliptic type A",
            Regime::EllipticBDegenerate => "degenerate elliptic type B",
            Regime::EllipticB => "elliptic type B",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Curvature density `1 - matter - vacuum`.
#[inline]
pub fn curvature_density(matter: f64, vacuum: f64) -> f64 {
    1.0 - matter - vacuum
}

/// True when the densities sum to exactly one. Either test counts: a pair
/// such as (0.32, 0.68) sums to 1.0 while `1 - matter - vacuum` rounds to
/// -1.1e-16.
#[inline]
pub fn is_flat_pair(matter: f64, vacuum: f64) -> bool {
    matter + vacuum == 1.0 || curvature_density(matter, vacuum) == 0.0
}

/// `-13.5 * matter^2 * vacuum / omega_k^3`, or `None` for a flat universe.
pub fn criticality(matter: f64, vacuum: f64) -> Option<f64> {
    if is_flat_pair(matter, vacuum) {
        return None;
    }
    let ok = curvature_density(matter, vacuum);
    Some(-13.5 * matter * matter * vacuum / (ok * ok * ok))
}
