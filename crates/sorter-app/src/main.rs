//! Sorter - sorts packages onto standard, special, or rejected stacks.
//!
//! Without a subcommand, prints the demonstration table and the rule summary.
//! `sorter classify W H L M` classifies a single package.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sorter_app::catalog::DEMO_PACKAGES;
use sorter_app::config::AppConfig;
use sorter_app::report::{self, ReportRow};
use sorter_core::{Package, PackageSorter};
use tracing_subscriber::EnvFilter;

/// Sorter - classify packages by size and mass
#[derive(Parser, Debug)]
#[command(name = "sorter", version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to a JSON config file with custom thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single package
    Classify {
        /// Width in centimeters
        #[arg(allow_negative_numbers = true)]
        width: f64,

        /// Height in centimeters
        #[arg(allow_negative_numbers = true)]
        height: f64,

        /// Length in centimeters
        #[arg(allow_negative_numbers = true)]
        length: f64,

        /// Mass in kilograms
        #[arg(allow_negative_numbers = true)]
        mass: f64,

        /// Reject negative, NaN, or infinite measurements
        #[arg(long)]
        strict: bool,
    },
}

/// Initialize console logging on stderr, leaving stdout for results.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sorter={0},sorter_app={0},sorter_core={0},warn",
            log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(sorter: &PackageSorter, json: bool) -> Result<()> {
    tracing::info!("Sorting {} demonstration packages", DEMO_PACKAGES.len());

    if json {
        let out = report::render_json(DEMO_PACKAGES, sorter)
            .context("Failed to serialize demonstration results")?;
        println!("{}", out);
    } else {
        print!("{}", report::render_demo(DEMO_PACKAGES, sorter));
    }
    Ok(())
}

fn run_classify(
    sorter: &PackageSorter,
    package: Package,
    strict: bool,
    json: bool,
) -> Result<()> {
    let decision = if strict {
        sorter
            .decide_checked(&package)
            .context("Invalid package measurements")?
    } else {
        sorter.decide(&package)
    };

    if json {
        let row = ReportRow {
            name: None,
            package,
            decision,
        };
        let out = serde_json::to_string_pretty(&row).context("Failed to serialize decision")?;
        println!("{}", out);
    } else {
        println!("{}", decision.stack);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let (config, source) =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!("Using thresholds {:?} from {:?}", config.thresholds, source);
    let sorter = config.sorter();

    match args.command {
        None => run_demo(&sorter, args.json),
        Some(Command::Classify {
            width,
            height,
            length,
            mass,
            strict,
        }) => run_classify(
            &sorter,
            Package::new(width, height, length, mass),
            strict,
            args.json,
        ),
    }
}
