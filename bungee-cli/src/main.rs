//! Bungee Jump Calculator CLI
//!
//! Command-line front end for `bungee-core`.
//!
//! # Commands
//!
//! - `calc`: one-shot calculation from four flags
//! - `interactive`: line-oriented form with set / calc / reset
//! - `constants`: print the given values the calculator works with

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

use error::CliExitCode;

/// Bungee Jump Calculator - size a cord from four measurements
#[derive(Parser)]
#[command(name = "bungee")]
#[command(version)]
#[command(about = "Bungee cord sizing from an energy balance")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate once and print the result
    Calc(commands::calc::CalcArgs),
    /// Fill in the form field by field
    Interactive(commands::interactive::InteractiveArgs),
    /// Show the constants in use
    Constants(commands::constants::ConstantsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Calc(args) => commands::calc::calc_command(args),
        Commands::Interactive(args) => commands::interactive::interactive_command(args),
        Commands::Constants(args) => commands::constants::constants_command(args),
    };

    match outcome {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            CliExitCode::Config.into()
        }
    }
}
