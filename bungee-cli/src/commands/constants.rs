//! The given values panel

use std::io::{self, Write};
use std::path::PathBuf;

use bungee_core::JumpConstants;
use clap::Args;

use super::load_constants;
use crate::error::CliExitCode;

/// Arguments for `bungee constants`
#[derive(Args, Debug)]
pub struct ConstantsArgs {
    /// JSON file overriding the default constants
    #[arg(long)]
    pub constants: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Handle `bungee constants`
pub fn constants_command(args: ConstantsArgs) -> anyhow::Result<CliExitCode> {
    let constants = load_constants(args.constants.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_constants(&constants, args.json, &mut out)?;
    Ok(CliExitCode::Success)
}

/// Write the constants panel
pub fn write_constants<W: Write>(
    constants: &JumpConstants,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(constants)?)?;
        return Ok(());
    }

    writeln!(out, "Given Values:")?;
    writeln!(out, "  Spring Constant: {} N/m", constants.spring_constant)?;
    writeln!(out, "  Buffer: {} m", constants.buffer)?;
    writeln!(out, "  No-Go Zone: {} m", constants.no_go_zone)?;
    writeln!(out, "  Ending Height: {} m", constants.ending_height)?;
    writeln!(out, "  Gravity: {} m/s²", constants.gravity)?;
    writeln!(
        out,
        "  Optimal Ending Height: {} m (band {} to {} m)",
        constants.optimal_ending_height, constants.optimal_band_min, constants.optimal_band_max
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panel() {
        let mut out = Vec::new();
        write_constants(&JumpConstants::default(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Spring Constant: 4.5 N/m"));
        assert!(text.contains("Buffer: 0.2 m"));
        assert!(text.contains("No-Go Zone: 0.1 m"));
        assert!(text.contains("Ending Height: 0.3 m"));
    }

    #[test]
    fn json_panel_round_trips() {
        let mut out = Vec::new();
        write_constants(&JumpConstants::default(), true, &mut out).unwrap();
        let parsed: JumpConstants = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, JumpConstants::default());
    }
}
