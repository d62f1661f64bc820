//! # parcel
//!
//! Prints order summaries.
//!
//! ## Usage
//! ```bash
//! # Built-in demo order
//! parcel
//!
//! # Orders from files, numbered from 100, as JSON
//! parcel --start 100 --format json orders/home.toml orders/shop.toml
//!
//! # Accept whatever the files contain
//! parcel --permissive orders/*.toml
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Load configuration (file, environment, then flags)
//! 3. Initialize tracing (stderr)
//! 4. Build orders and print the reports to stdout

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use parcel_cli::{CliConfig, OutputFormat};

/// Builds orders and prints their summaries
#[derive(Parser, Debug)]
#[command(name = "parcel", author, version, about)]
struct Cli {
    /// Config file (default: parcel.toml in the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Accept empty names, negative prices and zero quantities
    #[arg(long)]
    permissive: bool,

    /// Number given to the first order
    #[arg(long)]
    start: Option<u64>,

    /// Order files (TOML); the demo order is used when none are given
    orders: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flags go on top of file and environment; validation runs once, after.
    let mut config = CliConfig::load(cli.config.clone()).context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.permissive {
        config.validation.strict = false;
    }
    if let Some(start) = cli.start {
        config.sequence.start = start;
    }
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging.filter);

    let output = parcel_cli::run(&config, &cli.orders)?;
    println!("{}", output);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout
/// carries only the reports.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
