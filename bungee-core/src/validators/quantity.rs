//! Numeric validator for positive physical quantities

use crate::{
    errors::ValidationResult,
    inputs::InputField,
    traits::Validator,
};

use super::utils;

/// Accepts finite numbers strictly greater than zero
///
/// Applies to every calculator field: mass in kilograms and the three
/// lengths in metres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositiveQuantityValidator;

impl Validator for PositiveQuantityValidator {
    type Value = f64;

    fn validate(&self, value: &f64, field: InputField) -> ValidationResult<f64> {
        utils::check_positive(*value, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{InvalidReason, ValidationError};

    #[test]
    fn accepts_small_positive_values() {
        let validator = PositiveQuantityValidator;
        assert_eq!(validator.validate(&0.01, InputField::UnstretchedLength), Ok(0.01));
        assert_eq!(validator.validate(&f64::MIN_POSITIVE, InputField::Mass), Ok(f64::MIN_POSITIVE));
    }

    #[test]
    fn rejects_zero_mass() {
        let validator = PositiveQuantityValidator;
        assert_eq!(
            validator.validate(&0.0, InputField::Mass),
            Err(ValidationError::invalid(InputField::Mass, InvalidReason::NotPositive))
        );
    }
}
