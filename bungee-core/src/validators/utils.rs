//! Shared validation helpers
//!
//! Pure functions with no side effects, shared by the text and numeric
//! validators so both layers reject the same values the same way.

use crate::{
    errors::{InvalidReason, ValidationError, ValidationResult},
    inputs::InputField,
    traits::Validatable,
};

/// Check that a value is finite and strictly greater than zero
pub fn check_positive(value: f64, field: InputField) -> ValidationResult<f64> {
    if !value.is_valid() {
        Err(ValidationError::invalid(field, InvalidReason::NotFinite))
    } else if value <= 0.0 {
        Err(ValidationError::invalid(field, InvalidReason::NotPositive))
    } else {
        Ok(value)
    }
}

/// Parse decimal text, distinguishing "nothing entered" from "not a number"
///
/// Surrounding whitespace is ignored. The whole remaining text must be a
/// number; `"12kg"` is rejected rather than read as 12.
pub fn parse_decimal(text: &str, field: InputField) -> ValidationResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::invalid(field, InvalidReason::Missing));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::invalid(field, InvalidReason::NotANumber))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check() {
        assert_eq!(check_positive(5.0, InputField::Mass), Ok(5.0));
        assert!(check_positive(0.0, InputField::Mass).is_err());
        assert!(check_positive(-0.0, InputField::Mass).is_err());
        assert!(check_positive(-1.0, InputField::Mass).is_err());
        assert_eq!(
            check_positive(f64::NAN, InputField::Mass),
            Err(ValidationError::invalid(InputField::Mass, InvalidReason::NotFinite))
        );
    }

    #[test]
    fn decimal_parsing() {
        assert_eq!(parse_decimal("0.35", InputField::UnstretchedLength), Ok(0.35));
        assert_eq!(parse_decimal("  50\n", InputField::StartHeight), Ok(50.0));
        assert_eq!(parse_decimal("1e2", InputField::StartHeight), Ok(100.0));
        assert_eq!(
            parse_decimal("   ", InputField::Mass),
            Err(ValidationError::invalid(InputField::Mass, InvalidReason::Missing))
        );
        assert_eq!(
            parse_decimal("12kg", InputField::Mass),
            Err(ValidationError::invalid(InputField::Mass, InvalidReason::NotANumber))
        );
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
        assert!(!f32::INFINITY.is_valid());
    }
}
