//! Basic Calculation Example
//!
//! Sizes a bungee cord for the reference jump, then shows the two ways a
//! calculation can be refused.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_calculation
//! ```

use bungee_core::{
    CalculationEngine, InputField, JumpConstants, OptimalityMode, RawInputs, ValidationError,
};

fn main() {
    println!("Bungee Jump Calculator Example");
    println!("==============================\n");

    let constants = JumpConstants::default();
    println!("Given values:");
    println!("  Spring constant: {} N/m", constants.spring_constant);
    println!("  Buffer:          {} m", constants.buffer);
    println!("  No-go zone:      {} m", constants.no_go_zone);
    println!("  Ending height:   {} m", constants.ending_height);
    println!();

    let engine = CalculationEngine::new(constants);

    let reference = RawInputs::new(
        InputField::Mass.example(),
        InputField::StartHeight.example(),
        InputField::JumperHeight.example(),
        InputField::UnstretchedLength.example(),
    );

    println!("Reference jump:");
    for field in InputField::ALL {
        println!("  {:<26} {} {}", field.label(), reference.get(field), field.unit());
    }
    println!();

    match engine.compute_raw(&reference) {
        Ok(result) => println!("{result}\n"),
        Err(e) => println!("Unexpected failure: {e}\n"),
    }

    // Same jump, judged by the cord as it would actually be cut
    let as_built = engine.with_mode(OptimalityMode::AsBuilt);
    if let Ok(result) = as_built.compute_raw(&reference) {
        println!(
            "As built: ends at {:.4} m, {:.4} m from optimal\n",
            result.ending_height, result.distance_from_optimal
        );
    }

    let test_cases = [
        (RawInputs::new("0", "50", "1.7", "0.35"), "Zero mass"),
        (RawInputs::new("70", "", "1.7", "0.35"), "Missing start height"),
        (RawInputs::new("70", "50", "tall", "0.35"), "Jumper height not a number"),
        (RawInputs::new("70", "0.1", "1.7", "0.35"), "Platform below ending height"),
        (RawInputs::new("1e200", "1e200", "1.7", "0.35"), "Overflowing energy"),
    ];

    for (inputs, description) in &test_cases {
        print!("{description:<30} ");
        match engine.compute_raw(inputs) {
            Ok(_) => println!("✓ computed"),
            Err(ValidationError::InvalidInput { field, reason }) => {
                println!("✗ invalid {field}: {reason}")
            }
            Err(e) => println!("✗ {e}"),
        }
    }
}
