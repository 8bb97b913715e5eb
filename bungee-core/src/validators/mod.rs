//! Input Validators
//!
//! ## Overview
//!
//! Every calculator field is a physical quantity that must be a finite,
//! strictly positive decimal number. Validation happens in two layers:
//!
//! ### 1. Text Layer
//! What the user typed must be a decimal number at all. Parsing is explicit:
//! an empty field is `Missing`, unparseable text is `NotANumber`. A typed
//! `0` parses successfully and is rejected by the next layer instead, so
//! "not provided" and "provided but physically invalid" stay distinct.
//!
//! ### 2. Quantity Layer
//! The parsed number must be finite (`NotFinite`) and greater than zero
//! (`NotPositive`). A jumper with zero mass or a cord with zero length has
//! no physical meaning for the energy balance.
//!
//! ## Usage Example
//!
//! ```rust
//! use bungee_core::{InputField, Validator};
//! use bungee_core::validators::{PositiveQuantityValidator, TextQuantityValidator};
//!
//! let numeric = PositiveQuantityValidator;
//! assert_eq!(numeric.validate(&70.0, InputField::Mass)?, 70.0);
//!
//! let text = TextQuantityValidator::default();
//! assert_eq!(text.validate(" 1.7 ", InputField::JumperHeight)?, 1.7);
//! assert!(text.validate("0", InputField::Mass).is_err());
//! # Ok::<(), bungee_core::ValidationError>(())
//! ```

mod quantity;
mod text;
mod utils;

pub use quantity::PositiveQuantityValidator;
pub use text::TextQuantityValidator;
