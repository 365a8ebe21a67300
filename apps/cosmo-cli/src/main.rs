mod run_file;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cosmo_metric::{
    CosmologyParams, MetricError, PhysicalCosmology, PhysicalDistances, Regime, RedshiftSweep,
    Spacing,
};
use run_file::RunFile;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cosmo-cli")]
#[command(about = "Closed-form FLRW distances, volumes and ages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which analytic regime a parameter set falls in
    Classify {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Tabulate distances and times at the given redshifts
    Distances {
        #[command(flatten)]
        params: ParamArgs,
        /// Redshifts to evaluate
        #[arg(short = 'z', long = "redshift", num_args = 1.., required = true)]
        redshifts: Vec<f64>,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a redshift sweep from a run file or from flags
    Sweep {
        /// YAML run file holding `cosmology` and `sweep` sections
        run_file: Option<PathBuf>,
        #[command(flatten)]
        params: ParamArgs,
        /// First redshift
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Last redshift
        #[arg(long, default_value_t = 5.0)]
        end: f64,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Use logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Copy)]
struct ParamArgs {
    /// Hubble constant [km/s/Mpc]
    #[arg(long, default_value_t = 70.0)]
    hubble: f64,
    /// Matter density parameter
    #[arg(long, default_value_t = 0.3)]
    matter: f64,
    /// Vacuum density parameter
    #[arg(long, default_value_t = 0.7)]
    vacuum: f64,
}

impl From<ParamArgs> for CosmologyParams {
    fn from(args: ParamArgs) -> Self {
        CosmologyParams::new(args.hubble, args.matter, args.vacuum)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { params } => cmd_classify(params.into()),
        Commands::Distances {
            params,
            redshifts,
            json,
        } => cmd_distances(params.into(), &redshifts, json),
        Commands::Sweep {
            run_file,
            params,
            start,
            end,
            points,
            log,
            json,
        } => {
            let run = match run_file {
                Some(path) => {
                    info!(path = %path.display(), "loading run file");
                    RunFile::load(&path)?
                }
                None => {
                    let spacing = if log {
                        Spacing::Logarithmic
                    } else {
                        Spacing::Linear
                    };
                    RunFile {
                        cosmology: params.into(),
                        sweep: RedshiftSweep::new(start, end, points, spacing)?,
                    }
                }
            };
            cmd_sweep(&run, json)
        }
    }
}

fn cmd_classify(params: CosmologyParams) -> Result<()> {
    let cosmo = params.natural()?;
    println!("{cosmo}");
    println!("  regime:    {}", cosmo.regime());
    println!("  omega_k:   {:.6}", cosmo.curvature_density());
    match cosmo.criticality() {
        Some(crit) => println!("  crit:      {crit:.6}"),
        None => println!("  crit:      n/a (flat)"),
    }
    println!(
        "  age:       {}",
        if cosmo.regime().has_closed_form_age() {
            "closed form"
        } else {
            "unavailable"
        }
    );
    Ok(())
}

fn cmd_distances(params: CosmologyParams, redshifts: &[f64], json: bool) -> Result<()> {
    let cosmo = params.physical()?;
    let rows = redshifts
        .iter()
        .map(|&z| {
            cosmo
                .evaluate(z)
                .map(|d| DistanceRow::from(&d))
                .with_context(|| format!("evaluating z = {z}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let report = Report {
        cosmology: params,
        regime: cosmo.regime(),
        rows,
        failures: Vec::new(),
    };
    emit(&cosmo, &report, json)
}

fn cmd_sweep(run: &RunFile, json: bool) -> Result<()> {
    let cosmo = run.cosmology.physical()?;
    info!(%cosmo, sweep = %run.sweep, "running sweep");
    let result = cosmo.sweep(&run.sweep)?;

    let rows = result.successes().map(|(_, d)| DistanceRow::from(d)).collect();
    let failures = result
        .failures()
        .map(|(z, err)| FailedPoint::new(z, err))
        .collect();

    let report = Report {
        cosmology: run.cosmology,
        regime: cosmo.regime(),
        rows,
        failures,
    };
    emit(&cosmo, &report, json)
}

#[derive(Serialize)]
struct Report {
    cosmology: CosmologyParams,
    regime: Regime,
    rows: Vec<DistanceRow>,
    failures: Vec<FailedPoint>,
}

#[derive(Serialize)]
struct DistanceRow {
    z: f64,
    luminosity_mpc: f64,
    comoving_mpc: f64,
    transverse_comoving_mpc: f64,
    angular_diameter_mpc: f64,
    comoving_volume_mpc3: f64,
    angular_scale_pc_per_arcsec: f64,
    age_gyr: Option<f64>,
    lookback_time_gyr: Option<f64>,
}

impl From<&PhysicalDistances> for DistanceRow {
    fn from(d: &PhysicalDistances) -> Self {
        Self {
            z: d.redshift,
            luminosity_mpc: d.luminosity_mpc(),
            comoving_mpc: d.comoving_mpc(),
            transverse_comoving_mpc: d.transverse_comoving_mpc(),
            angular_diameter_mpc: d.angular_diameter_mpc(),
            comoving_volume_mpc3: d.comoving_volume_mpc3(),
            angular_scale_pc_per_arcsec: d.angular_scale,
            age_gyr: d.age_gyr(),
            lookback_time_gyr: d.lookback_time_gyr(),
        }
    }
}

#[derive(Serialize)]
struct FailedPoint {
    z: f64,
    error: String,
}

impl FailedPoint {
    fn new(z: f64, err: &MetricError) -> Self {
        Self {
            z,
            error: err.to_string(),
        }
    }
}

fn emit(cosmo: &PhysicalCosmology, report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{cosmo} [{}]", report.regime);
    println!(
        "{:>10} {:>14} {:>14} {:>14} {:>16} {:>12} {:>10} {:>10}",
        "z", "dL [Mpc]", "dC [Mpc]", "dA [Mpc]", "Vc [Mpc^3/sr]", "pc/arcsec", "age [Gyr]", "lb [Gyr]"
    );
    for row in &report.rows {
        println!(
            "{:>10.4} {:>14.4} {:>14.4} {:>14.4} {:>16.6e} {:>12.4} {:>10} {:>10}",
            row.z,
            row.luminosity_mpc,
            row.comoving_mpc,
            row.angular_diameter_mpc,
            row.comoving_volume_mpc3,
            row.angular_scale_pc_per_arcsec,
            fmt_optional(row.age_gyr),
            fmt_optional(row.lookback_time_gyr),
        );
    }
    for failed in &report.failures {
        println!("{:>10.4}  failed: {}", failed.z, failed.error);
    }
    Ok(())
}

fn fmt_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}
