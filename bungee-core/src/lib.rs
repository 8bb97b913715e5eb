//! Core calculation engine for the bungee jump calculator
//!
//! Sizes a bungee cord from four measurements using an energy balance:
//! everything the jumper has at the platform ends up as gravitational
//! energy at the target clearance plus elastic energy in the stretched cord.
//!
//! Key constraints:
//! - Pure, deterministic arithmetic on `f64`
//! - No heap allocation in the engine itself
//! - Builds without `std` (session state needs `alloc`)
//!
//! ```
//! use bungee_core::{CalculationEngine, RawInputs};
//!
//! let engine = CalculationEngine::default();
//! let inputs = RawInputs::new("70", "50", "1.7", "0.35");
//!
//! match engine.compute_raw(&inputs) {
//!     Ok(result) => assert!(result.is_optimal),
//!     Err(e) => panic!("unexpected: {e}"),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod inputs;
pub mod optimality;
pub mod result;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod session;
pub mod traits;
pub mod validators;

// Public API
pub use config::JumpConstants;
pub use engine::CalculationEngine;
pub use errors::{ConfigError, InvalidReason, ValidationError, ValidationResult};
pub use inputs::{InputField, JumpInputs, RawInputs};
pub use optimality::{Optimality, OptimalityMode};
pub use result::JumpResult;
#[cfg(any(feature = "std", feature = "alloc"))]
pub use session::{CalculatorSession, SessionState};
pub use traits::{Validatable, Validator};
pub use validators::{PositiveQuantityValidator, TextQuantityValidator};

/// Crate version, for front ends that print it
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
