//! Line-oriented calculator form
//!
//! Reads one command per line:
//!
//! ```text
//! set <field> <value>   fill in a field (mass, start_height, jumper_height, unstretched_length)
//! calc                  validate and calculate
//! reset                 clear every field and the result
//! show                  print fields and the current result
//! help                  list commands
//! quit                  leave
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use bungee_core::{CalculatorSession, InputField, SessionState};
use clap::Args;

use super::{build_engine, ModeArg};
use crate::error::CliExitCode;

/// Arguments for `bungee interactive`
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Which ending height the optimality check judges
    #[arg(long, value_enum, default_value_t = ModeArg::Literal)]
    pub mode: ModeArg,

    /// JSON file overriding the default constants
    #[arg(long)]
    pub constants: Option<PathBuf>,
}

const HELP: &str = "\
Commands:
  set <field> <value>   fill in a field (mass, start_height, jumper_height, unstretched_length)
  calc                  validate and calculate
  reset                 clear every field and the result
  show                  print fields and the current result
  help                  list commands
  quit                  leave";

/// Handle `bungee interactive`
pub fn interactive_command(args: InteractiveArgs) -> anyhow::Result<CliExitCode> {
    let engine = build_engine(args.constants.as_deref(), args.mode)?;
    let mut session = CalculatorSession::new(engine);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, stdin.lock(), &mut stdout.lock())?;
    Ok(CliExitCode::Success)
}

/// Drive a session from `input` until EOF or `quit`
pub fn run_session<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Bungee Jump Calculator - type `help` for commands")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = split_word(line);

        match command {
            "set" => {
                // The value is everything after the field name, so the
                // validator sees exactly what was typed
                let (name, value) = split_word(rest);
                if name.is_empty() || value.is_empty() {
                    writeln!(out, "usage: set <field> <value>")?;
                    continue;
                }
                match InputField::from_name(name) {
                    Some(field) => {
                        session.set_field(field, value);
                        tracing::debug!(field = field.name(), value, "Field set");
                    }
                    None => writeln!(out, "unknown field `{name}`")?,
                }
            }
            "calc" | "calculate" => match session.calculate() {
                Ok(result) => writeln!(out, "{result}")?,
                Err(err) => {
                    writeln!(out, "Please enter valid positive numbers for all fields: {err}")?;
                    session.acknowledge();
                }
            },
            "reset" => {
                session.reset();
                writeln!(out, "Form cleared")?;
            }
            "show" => show(session, out)?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command `{other}`; type `help`")?,
        }
    }

    Ok(())
}

/// Split off the first word; the remainder is trimmed
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn show<W: Write>(session: &CalculatorSession, out: &mut W) -> io::Result<()> {
    writeln!(out, "  {:<26} {}", "Optimality mode", session.engine().mode())?;
    for field in InputField::ALL {
        let text = session.field(field);
        let shown = if text.is_empty() {
            format!("(e.g. {})", field.example())
        } else {
            text.to_string()
        };
        writeln!(out, "  {:<26} {} {}", field.label(), shown, field.unit())?;
    }

    match session.state() {
        SessionState::Empty => writeln!(out, "No result yet"),
        SessionState::Computed(result) => writeln!(out, "{result}"),
        SessionState::Error(err) => writeln!(out, "Error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bungee_core::{CalculationEngine, OptimalityMode};

    fn drive(script: &str) -> (CalculatorSession, String) {
        let mut session = CalculatorSession::new(CalculationEngine::default());
        let mut out = Vec::new();
        run_session(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn fill_and_calculate() {
        let (session, out) = drive(
            "set mass 70\nset start_height 50\nset jumper 1.7\nset cord 0.35\ncalc\n",
        );
        assert!(out.contains("Bungee Stretch Distance: 123.10 m"));
        assert!(session.result().is_some());
    }

    #[test]
    fn invalid_field_shows_message_and_no_result() {
        let (session, out) =
            drive("set mass 0\nset start 50\nset jumper 1.7\nset cord 0.35\ncalc\n");
        assert!(out.contains("Invalid mass: must be greater than zero"));
        assert!(!out.contains("String Added"));
        assert_eq!(session.state(), &SessionState::Empty);
    }

    #[test]
    fn value_with_spaces_is_kept_whole_and_rejected() {
        let (session, out) =
            drive("set mass 7 0kg\nset start 50\nset jumper 1.7\nset cord 0.35\ncalc\n");
        assert_eq!(session.field(InputField::Mass), "7 0kg");
        assert!(out.contains("Invalid mass: not a decimal number"));
        assert!(!out.contains("Total Energy"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let (session, _) = drive("  set   jumper   1.7  \n");
        assert_eq!(session.field(InputField::JumperHeight), "1.7");
    }

    #[test]
    fn show_reports_the_optimality_mode() {
        let mut session =
            CalculatorSession::new(CalculationEngine::default().with_mode(OptimalityMode::AsBuilt));
        let mut out = Vec::new();
        run_session(&mut session, "show\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Optimality mode"));
        assert!(out.contains("as-built"));
    }

    #[test]
    fn reset_clears_fields() {
        let (session, out) = drive("set mass 70\nreset\nshow\n");
        assert!(out.contains("Form cleared"));
        assert!(out.contains("(e.g. 70)"));
        assert_eq!(session.field(InputField::Mass), "");
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = drive("quit\nset mass 70\n");
        assert_eq!(session.field(InputField::Mass), "");
    }

    #[test]
    fn unknown_input_is_reported() {
        let (_, out) = drive("set weight 70\njump\nset mass\n");
        assert!(out.contains("unknown field `weight`"));
        assert!(out.contains("unknown command `jump`"));
        assert!(out.contains("usage: set <field> <value>"));
    }
}
