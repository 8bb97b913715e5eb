//! Command handlers and the helpers they share
//!
//! # Commands
//!
//! - `calc`: one-shot calculation
//! - `interactive`: form session over stdin/stdout
//! - `constants`: the given values panel

pub mod calc;
pub mod constants;
pub mod interactive;

use std::fs;
use std::path::Path;

use anyhow::Context;
use bungee_core::{CalculationEngine, JumpConstants, OptimalityMode, ValidationError};
use clap::ValueEnum;
use serde_json::{json, Value};

/// Optimality interpretation as a CLI flag value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Judge the configured ending height
    #[default]
    Literal,
    /// Judge the ending height reached by the cord as cut to 1 cm
    AsBuilt,
}

impl From<ModeArg> for OptimalityMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Literal => OptimalityMode::Literal,
            ModeArg::AsBuilt => OptimalityMode::AsBuilt,
        }
    }
}

/// Load constants from a JSON file, or the defaults when no path is given
pub fn load_constants(path: Option<&Path>) -> anyhow::Result<JumpConstants> {
    let constants = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading constants file {}", path.display()))?;
            let constants: JumpConstants = serde_json::from_str(&text)
                .with_context(|| format!("parsing constants file {}", path.display()))?;
            tracing::info!(path = %path.display(), "Loaded constants");
            constants
        }
        None => JumpConstants::default(),
    };

    constants.validate().context("constants rejected")?;
    Ok(constants)
}

/// Build the engine a command runs against
pub fn build_engine(path: Option<&Path>, mode: ModeArg) -> anyhow::Result<CalculationEngine> {
    let constants = load_constants(path)?;
    tracing::debug!(?constants, ?mode, "Engine configured");
    Ok(CalculationEngine::new(constants).with_mode(mode.into()))
}

/// JSON body describing a calculation error
pub fn error_json(err: &ValidationError) -> Value {
    match err {
        ValidationError::InvalidInput { field, reason } => json!({
            "error": {
                "kind": "invalid_input",
                "field": field,
                "reason": reason,
                "message": err.to_string(),
            }
        }),
        ValidationError::NumericDomainError { operand } => json!({
            "error": {
                "kind": "numeric_domain",
                "operand": operand,
                "message": err.to_string(),
            }
        }),
        ValidationError::Overflow { quantity } => json!({
            "error": {
                "kind": "overflow",
                "quantity": quantity,
                "message": err.to_string(),
            }
        }),
    }
}
