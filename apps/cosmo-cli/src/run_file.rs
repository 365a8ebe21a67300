//! YAML run files: a parameter set plus a redshift sweep.

use anyhow::{Context, Result};
use cosmo_metric::{CosmologyParams, RedshiftSweep};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    #[serde(default)]
    pub cosmology: CosmologyParams,
    pub sweep: RedshiftSweep,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading run file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in run file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let run: RunFile = serde_yaml::from_str(text).context("invalid run file")?;
        run.sweep.validate()?;
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_metric::Spacing;

    #[test]
    fn bundled_run_file_parses() {
        let run = RunFile::parse(include_str!("../runs/concordance.yaml")).unwrap();
        assert_eq!(run.cosmology, CosmologyParams::default());
        assert_eq!(run.sweep.spacing, Spacing::Logarithmic);
        assert_eq!(run.sweep.num_points, 25);
    }

    #[test]
    fn cosmology_defaults_when_omitted() {
        let text = "sweep:\n  start: 0.0\n  end: 2.0\n  num_points: 3\n  spacing: linear\n";
        let run = RunFile::parse(text).unwrap();
        assert_eq!(run.cosmology.hubble, 70.0);
    }

    #[test]
    fn invalid_sweep_is_rejected() {
        let text = "sweep:\n  start: 0.0\n  end: 2.0\n  num_points: 3\n  spacing: logarithmic\n";
        assert!(RunFile::parse(text).is_err());
    }

    #[test]
    fn unknown_cosmology_field_is_rejected() {
        let text = "cosmology:\n  hubble: 70.0\n  matter: 0.3\n  vacuum: 0.7\n  radiation: 0.0\nsweep:\n  start: 0.0\n  end: 2.0\n  num_points: 3\n  spacing: linear\n";
        assert!(RunFile::parse(text).is_err());
    }
}
