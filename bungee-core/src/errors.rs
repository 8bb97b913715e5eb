//! Error Types for Calculation Failures
//!
//! ## Error Categories
//!
//! ### User Input
//! - `InvalidInput`: one of the four fields is missing, not a number,
//!   not finite, or not strictly positive. Detected before any arithmetic.
//!
//! ### Numeric Domain
//! - `NumericDomainError`: the stretch-distance square root received a
//!   negative operand. This happens when the start height is below the
//!   target ending height, so the ending gravitational energy exceeds the
//!   total energy. Detected right after the square-root step and returned
//!   instead of a NaN-filled result.
//! - `Overflow`: the inputs are individually valid but so large that a
//!   computed quantity leaves the `f64` range (`1e200 kg` from `1e200 m`).
//!
//! ### Configuration
//! - [`ConfigError`]: a substituted [`JumpConstants`](crate::JumpConstants)
//!   value makes the formulas meaningless (zero spring constant, etc).
//!
//! ## Handling
//!
//! ```rust
//! use bungee_core::{CalculationEngine, RawInputs, ValidationError};
//!
//! let engine = CalculationEngine::default();
//! match engine.compute_raw(&RawInputs::new("0", "50", "1.7", "0.35")) {
//!     Ok(_result) => {}
//!     Err(ValidationError::InvalidInput { field, reason }) => {
//!         // Ask the user to fix `field`
//!         let _ = (field, reason);
//!     }
//!     Err(ValidationError::NumericDomainError { .. }) => {
//!         // Start height below the target clearance
//!     }
//!     Err(ValidationError::Overflow { .. }) => {
//!         // Inputs too large to calculate with
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::inputs::InputField;

/// Result type for calculation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a single input field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InvalidReason {
    /// Field left empty
    Missing,
    /// Text does not parse as a decimal number
    NotANumber,
    /// Parsed to NaN or infinity
    NotFinite,
    /// Zero or negative
    NotPositive,
}

impl InvalidReason {
    /// Short human-readable description
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Missing => "no value entered",
            Self::NotANumber => "not a decimal number",
            Self::NotFinite => "not a finite number",
            Self::NotPositive => "must be greater than zero",
        }
    }
}

impl core::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Calculation errors - small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// An input field failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// The field that was rejected
        field: InputField,
        /// Why it was rejected
        reason: InvalidReason,
    },

    /// Square root of a negative operand in the stretch-distance formula
    #[error("Stretch distance undefined: sqrt of negative operand {operand}")]
    NumericDomainError {
        /// The operand `2 * elastic_pe / k` that came out negative
        operand: f64,
    },

    /// A computed quantity left the finite `f64` range
    #[error("Result {quantity} is out of range for the given inputs")]
    Overflow {
        /// Name of the quantity that overflowed
        quantity: &'static str,
    },
}

impl ValidationError {
    /// Shorthand for an `InvalidInput` error
    pub const fn invalid(field: InputField, reason: InvalidReason) -> Self {
        Self::InvalidInput { field, reason }
    }

    /// True for errors the user can fix by editing a field
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// The offending field, if the error is tied to one
    pub const fn field(&self) -> Option<InputField> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            Self::NumericDomainError { .. } | Self::Overflow { .. } => None,
        }
    }
}

/// Rejected calculator configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A constant is non-finite or outside its allowed sign
    #[error("Constant {name} has invalid value {value}")]
    InvalidConstant {
        /// Constant name as it appears in the config
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Optimal band edges are reversed
    #[error("Optimal band [{min}, {max}] is empty")]
    InvalidBand {
        /// Lower edge
        min: f64,
        /// Upper edge
        max: f64,
    },
}
