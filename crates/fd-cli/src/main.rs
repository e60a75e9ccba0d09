//! `fair-deck` binary entry point.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;

use fd_cli::cli::{Cli, Command};
use fd_cli::{commands, settings};
use fd_telemetry::{init_logging, TelemetryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = &cli.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    init_logging(&telemetry).context("initializing logging")?;

    let base = settings::load_base(cli.config.as_deref())?;
    debug!(?base, "base configuration loaded");

    match cli.command {
        Command::Shuffle(args) => {
            let config = settings::resolve_shuffle(base, &args)?;
            println!("{}", commands::run_shuffle(config, args.json)?);
        }
        Command::Analyze(args) => {
            let config = settings::resolve_analysis(base, &args)?;
            let output = commands::run_analyze(config)?;
            println!("{}", output.text);
            if !output.passed {
                bail!("shuffle distribution is outside tolerance");
            }
        }
    }

    Ok(())
}
