//! CLI entry point for the `ntime` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use nonlinear_time::cli::commands;
use nonlinear_time::NtError;

#[derive(Parser)]
#[command(
    name = "ntime",
    about = "Nonlinear time: inverse-logarithmic weights for subjective time"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Echo resolved parameters to stderr
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weight of every unit on the curve
    Weights {
        /// Number of units (e.g. years)
        #[arg(long, allow_negative_numbers = true)]
        items: Option<i64>,
        /// Offset inside the logarithm; higher is flatter
        #[arg(long, allow_negative_numbers = true)]
        steepness: Option<f64>,
        /// TOML file with total_items / steepness
        #[arg(long)]
        config: Option<PathBuf>,
        /// Reject a steepness that makes the curve degenerate
        #[arg(long)]
        strict: bool,
        /// Decimal places in text output
        #[arg(long, default_value = "4")]
        decimals: usize,
    },
    /// Format a single weight as a percentage
    Percent {
        /// Weight, typically in (0, 1)
        #[arg(allow_negative_numbers = true)]
        weight: f64,
    },
    /// Print aggregate figures for a curve
    Summary {
        /// Number of units (e.g. years)
        #[arg(long, allow_negative_numbers = true)]
        items: Option<i64>,
        /// Offset inside the logarithm; higher is flatter
        #[arg(long, allow_negative_numbers = true)]
        steepness: Option<f64>,
        /// TOML file with total_items / steepness
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Weights {
            items,
            steepness,
            config,
            strict,
            decimals,
        } => commands::resolve_config(config.as_deref(), items, steepness).and_then(|c| {
            if verbose {
                eprintln!("Resolved curve: {:?}", c);
            }
            commands::cmd_weights(c, strict, decimals, json)
        }),
        Commands::Percent { weight } => commands::cmd_percent(weight, json),
        Commands::Summary {
            items,
            steepness,
            config,
        } => commands::resolve_config(config.as_deref(), items, steepness).and_then(|c| {
            if verbose {
                eprintln!("Resolved curve: {:?}", c);
            }
            commands::cmd_summary(c, json)
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            NtError::Io(_) => 1,
            NtError::InvalidSteepness(_) | NtError::TooManyItems { .. } | NtError::Config(_) => 3,
            NtError::NonFiniteWeight { .. } => 5,
        };
        process::exit(code);
    }
}
