//! Satellite deploy orbit calculator.
//!
//! Prints the deployment orbit as JSON on stdout. Diagnostics go to stderr and
//! are filtered with `RUST_LOG` (warnings by default).

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use deploy_orbit_calculator::config::{DeployDefaults, load_defaults};
use deploy_orbit_calculator::export::{DeployReport, write_json};
use deploy_orbit_calculator::orbits::{
    DeployRequest, DeploySettings, DeploymentPolicy, compute_deploy_orbit,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Satellite deploy orbit calculator",
    long_about = "Satellite deploy orbit calculator. Computes an orbit for deploying N \
                  satellites all equally spread. The satellites are released every time \
                  the carrier spacecraft passes its apoapsis."
)]
struct Cli {
    /// The target orbit apoapsis
    #[arg(value_name = "Ap", allow_negative_numbers = true)]
    apoapsis: f64,

    /// The target orbit periapsis
    #[arg(value_name = "Pe", allow_negative_numbers = true)]
    periapsis: f64,

    /// The standard gravitational parameter of the body, aka μ
    #[arg(value_name = "GM", allow_negative_numbers = true)]
    gm: f64,

    /// The radius of the body (not required if Ap and Pe include it) [default: 0]
    #[arg(long = "R", value_name = "R", allow_negative_numbers = true)]
    radius: Option<f64>,

    /// The number of satellites to deploy [default: 3]
    #[arg(long = "n", value_name = "N")]
    satellites: Option<u32>,

    /// Defaults file (TOML or YAML) for the radius, count, and order options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the release order of the satellites; may push periapsis below the surface.
    /// `--preserve-order=false` overrides a defaults file that enables it.
    #[arg(
        long,
        hide = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    preserve_order: Option<bool>,
}

impl Cli {
    fn settings(&self, defaults: &DeployDefaults) -> DeploySettings {
        let builtin = DeploySettings::default();
        DeploySettings {
            body_radius: self
                .radius
                .or(defaults.body_radius)
                .unwrap_or(builtin.body_radius),
            satellite_count: self
                .satellites
                .or(defaults.satellite_count)
                .unwrap_or(builtin.satellite_count),
            policy: DeploymentPolicy::from_preserve_order(
                self.preserve_order
                    .or(defaults.preserve_order)
                    .unwrap_or(false),
            ),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();
    let defaults = match &cli.config {
        Some(path) => load_defaults(path)
            .with_context(|| format!("failed to load defaults from {}", path.display()))?,
        None => DeployDefaults::default(),
    };

    let request = DeployRequest::new(cli.apoapsis, cli.periapsis, cli.gm)
        .with_settings(cli.settings(&defaults));
    let orbit = compute_deploy_orbit(&request).context("invalid input")?;
    tracing::debug!(fraction = orbit.period_fraction(), "deployment orbit ready");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, &DeployReport::from(&orbit))?;
    writeln!(handle)?;
    Ok(())
}
