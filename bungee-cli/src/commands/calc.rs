//! One-shot calculation

use std::io::{self, Write};
use std::path::PathBuf;

use bungee_core::RawInputs;
use clap::Args;
use serde_json::json;

use super::{build_engine, error_json, ModeArg};
use crate::error::{exit_code_for_error, CliExitCode};

/// Arguments for `bungee calc`
///
/// Values are taken as text and validated exactly like form fields.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Mass of the jumper (kg)
    #[arg(long, allow_hyphen_values = true)]
    pub mass: String,

    /// Starting height of the platform (m)
    #[arg(long, allow_hyphen_values = true)]
    pub start_height: String,

    /// Standing height of the jumper (m)
    #[arg(long, allow_hyphen_values = true)]
    pub jumper_height: String,

    /// Unstretched length of the cord (m)
    #[arg(long, allow_hyphen_values = true)]
    pub unstretched_length: String,

    /// Which ending height the optimality check judges
    #[arg(long, value_enum, default_value_t = ModeArg::Literal)]
    pub mode: ModeArg,

    /// JSON file overriding the default constants
    #[arg(long)]
    pub constants: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle `bungee calc`
pub fn calc_command(args: CalcArgs) -> anyhow::Result<CliExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_calc(&args, &mut out)
}

/// Calculate and write the outcome to `out`
pub fn run_calc<W: Write>(args: &CalcArgs, out: &mut W) -> anyhow::Result<CliExitCode> {
    let engine = build_engine(args.constants.as_deref(), args.mode)?;
    let raw = RawInputs::new(
        &args.mass,
        &args.start_height,
        &args.jumper_height,
        &args.unstretched_length,
    );

    let inputs = match raw.parse() {
        Ok(inputs) => inputs,
        Err(err) => return report_error(&err, args.json, out),
    };

    match engine.compute(&inputs) {
        Ok(result) => {
            tracing::info!(optimal = result.is_optimal, "Calculation complete");
            if args.json {
                let body = json!({
                    "inputs": inputs,
                    "mode": engine.mode(),
                    "result": result,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(out, "{result}")?;
            }
            Ok(CliExitCode::Success)
        }
        Err(err) => report_error(&err, args.json, out),
    }
}

fn report_error<W: Write>(
    err: &bungee_core::ValidationError,
    json: bool,
    out: &mut W,
) -> anyhow::Result<CliExitCode> {
    tracing::warn!(%err, "Calculation refused");
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&error_json(err))?)?;
    } else {
        writeln!(out, "Please enter valid positive numbers for all fields: {err}")?;
    }
    Ok(exit_code_for_error(err))
}
