//! Core traits for input validators
//!
//! Keep them simple - a calculator input has one field and one value.

use crate::errors::ValidationResult;
use crate::inputs::InputField;

/// Core validator trait - turns a field value into a usable measurement
pub trait Validator {
    /// The kind of value this validator accepts (`f64`, `str`, ...)
    type Value: ?Sized;

    /// Validate a single field, returning the accepted measurement
    fn validate(&self, value: &Self::Value, field: InputField) -> ValidationResult<f64>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
