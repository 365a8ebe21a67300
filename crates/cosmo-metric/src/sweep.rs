//! Redshift sweeps.
//!
//! Generates redshift grids and evaluates a cosmology over them, producing
//! tables suitable for plotting and comparison.

use crate::error::{MetricError, MetricResult};
use rayon::prelude::*;
use std::fmt;
use tracing::warn;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Spacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Redshift grid definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedshiftSweep {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub spacing: Spacing,
}

impl RedshiftSweep {
    pub fn new(start: f64, end: f64, num_points: usize, spacing: Spacing) -> MetricResult<Self> {
        let sweep = Self {
            start,
            end,
            num_points,
            spacing,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn linear(start: f64, end: f64, num_points: usize) -> MetricResult<Self> {
        Self::new(start, end, num_points, Spacing::Linear)
    }

    pub fn logarithmic(start: f64, end: f64, num_points: usize) -> MetricResult<Self> {
        Self::new(start, end, num_points, Spacing::Logarithmic)
    }

    /// Check bounds and point count. Deserialized sweeps bypass `new`, so
    /// callers loading them from files should run this first.
    pub fn validate(&self) -> MetricResult<()> {
        if self.num_points < 2 {
            return Err(MetricError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        for z in [self.start, self.end] {
            if !z.is_finite() || z < 0.0 {
                return Err(MetricError::InvalidRedshift { z });
            }
        }
        if self.start == self.end {
            return Err(MetricError::InvalidArg {
                what: "sweep start and end must differ",
            });
        }
        if self.spacing == Spacing::Logarithmic && self.start.min(self.end) <= 0.0 {
            return Err(MetricError::InvalidArg {
                what: "logarithmic sweep requires positive bounds",
            });
        }
        Ok(())
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            Spacing::Linear => self.generate_linear(),
            Spacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        let n = self.num_points;
        let delta = (self.end - self.start) / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n).map(|i| self.start + i as f64 * delta).collect();
        // Ensure exact endpoint
        points[n - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        let n = self.num_points;
        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();
        points[0] = self.start;
        points[n - 1] = self.end;
        points
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

impl fmt::Display for RedshiftSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep z from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.spacing
        )
    }
}

/// Outcome of evaluating a sweep. Failed points are kept in place.
#[derive(Debug, Clone)]
pub struct SweepResult<T> {
    pub redshifts: Vec<f64>,
    pub records: Vec<MetricResult<T>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl<T> SweepResult<T> {
    /// Successful points paired with their redshift.
    pub fn successes(&self) -> impl Iterator<Item = (f64, &T)> + '_ {
        self.redshifts
            .iter()
            .zip(&self.records)
            .filter_map(|(z, rec)| rec.as_ref().ok().map(|r| (*z, r)))
    }

    /// Failed points paired with their redshift.
    pub fn failures(&self) -> impl Iterator<Item = (f64, &MetricError)> + '_ {
        self.redshifts
            .iter()
            .zip(&self.records)
            .filter_map(|(z, rec)| rec.as_ref().err().map(|e| (*z, e)))
    }
}

/// Evaluate `eval` at every point of `sweep` in parallel, preserving order.
pub fn execute_sweep<T, F>(sweep: &RedshiftSweep, eval: F) -> MetricResult<SweepResult<T>>
where
    T: Send,
    F: Fn(f64) -> MetricResult<T> + Sync,
{
    sweep.validate()?;
    let redshifts = sweep.generate_points();
    let records: Vec<MetricResult<T>> = redshifts.par_iter().map(|&z| eval(z)).collect();

    let num_failed = records.iter().filter(|r| r.is_err()).count();
    let num_successful = records.len() - num_failed;
    for (z, rec) in redshifts.iter().zip(&records) {
        if let Err(err) = rec {
            warn!(z, %err, "sweep point failed");
        }
    }

    Ok(SweepResult {
        redshifts,
        records,
        num_successful,
        num_failed,
    })
}
