//! favicon-forge CLI - Generate the favicon set from the project logo.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use favicon_forge::{Config, Generator};

/// Generate favicon.ico plus the PNG favicon sizes from the project logo.
///
/// Reads `public/images/logos/LOGO 1 SEM FUNDO.png` and writes into `public/`.
#[derive(Parser, Debug)]
#[command(name = "favicon-forge")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("favicon_forge={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let generator = Generator::new(Config::default()).context("Failed to initialize generator")?;

    let report = generator
        .generate()
        .context("Failed to generate favicons")?;

    report
        .ensure_complete()
        .with_context(|| format!("Incomplete favicon set in {}", report.output_dir().display()))?;

    Ok(())
}
