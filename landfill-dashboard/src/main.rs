//! Landfill design checks from the command line.
//!
//! Evaluates the cross-section, settlement, leachate, and slope stability
//! models for one set of inputs, read from a TOML file and/or flags.

mod commands;
mod config;
mod report;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Engineered landfill analysis and design checks
#[derive(Parser)]
#[command(name = "landfill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Engineered landfill analysis and design checks", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every model and print the results
    Report(commands::report::ReportArgs),
    /// Check the inputs against their allowed ranges
    Validate(commands::validate::ValidateArgs),
    /// Print the default inputs as TOML
    Defaults,
    /// Open a chart window for one analysis
    Plot(commands::plot::PlotArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Report(args) => commands::report::execute(&args),
        Commands::Validate(args) => commands::validate::execute(&args),
        Commands::Defaults => commands::defaults::execute(),
        Commands::Plot(args) => commands::plot::execute(&args),
    }
}
