//! Text validator for form fields
//!
//! Wraps [`PositiveQuantityValidator`] with an explicit parse step so a
//! field that was never filled in is reported as `Missing`, not confused
//! with a typed zero.

use crate::{
    errors::ValidationResult,
    inputs::InputField,
    traits::Validator,
};

use super::{utils, PositiveQuantityValidator};

/// Validates field text as a positive decimal quantity
#[derive(Debug, Clone, Copy, Default)]
pub struct TextQuantityValidator {
    quantity: PositiveQuantityValidator,
}

impl Validator for TextQuantityValidator {
    type Value = str;

    fn validate(&self, value: &str, field: InputField) -> ValidationResult<f64> {
        let parsed = utils::parse_decimal(value, field)?;
        self.quantity.validate(&parsed, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{InvalidReason, ValidationError};

    fn reason(text: &str) -> Option<InvalidReason> {
        match TextQuantityValidator::default().validate(text, InputField::Mass) {
            Ok(_) => None,
            Err(ValidationError::InvalidInput { reason, .. }) => Some(reason),
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn typed_zero_is_not_missing() {
        assert_eq!(reason(""), Some(InvalidReason::Missing));
        assert_eq!(reason("0"), Some(InvalidReason::NotPositive));
        assert_eq!(reason("0.0"), Some(InvalidReason::NotPositive));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(reason("seventy"), Some(InvalidReason::NotANumber));
        assert_eq!(reason("7,0"), Some(InvalidReason::NotANumber));
        assert_eq!(reason("-5"), Some(InvalidReason::NotPositive));
    }

    #[test]
    fn rejects_textual_infinities() {
        assert_eq!(reason("inf"), Some(InvalidReason::NotFinite));
        assert_eq!(reason("NaN"), Some(InvalidReason::NotFinite));
    }

    #[test]
    fn accepts_decimal_text() {
        assert_eq!(reason("70"), None);
        assert_eq!(reason(".5"), None);
        assert_eq!(reason("+3.25"), None);
    }
}
