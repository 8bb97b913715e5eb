//! The four measurements a calculation starts from
//!
//! [`RawInputs`] is what a user typed; [`JumpInputs`] is the validated,
//! numeric form. The engine only accepts the latter, so a result can never
//! exist for inputs that failed validation.

use crate::{
    errors::ValidationResult,
    traits::Validator,
    validators::{PositiveQuantityValidator, TextQuantityValidator},
};

/// One of the four calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputField {
    /// Jumper mass (kg)
    Mass,
    /// Drop height of the platform above the ground (m)
    StartHeight,
    /// Standing height of the jumper (m)
    JumperHeight,
    /// Resting length of the elastic cord (m)
    UnstretchedLength,
}

impl InputField {
    /// All fields, in form order
    pub const ALL: [InputField; 4] = [
        InputField::Mass,
        InputField::StartHeight,
        InputField::JumperHeight,
        InputField::UnstretchedLength,
    ];

    /// Machine name (snake_case)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::StartHeight => "start_height",
            Self::JumperHeight => "jumper_height",
            Self::UnstretchedLength => "unstretched_length",
        }
    }

    /// SI unit symbol
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::StartHeight | Self::JumperHeight | Self::UnstretchedLength => "m",
        }
    }

    /// Label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mass => "Mass of Jumper",
            Self::StartHeight => "Starting Height",
            Self::JumperHeight => "Height of Jumper",
            Self::UnstretchedLength => "Unstretched String Length",
        }
    }

    /// Example value used as a placeholder hint
    pub const fn example(self) -> &'static str {
        match self {
            Self::Mass => "70",
            Self::StartHeight => "50",
            Self::JumperHeight => "1.7",
            Self::UnstretchedLength => "0.35",
        }
    }

    /// Look a field up by name; accepts snake_case, kebab-case and short aliases
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mass" | "m" => Some(Self::Mass),
            "start_height" | "start-height" | "start" | "h0" => Some(Self::StartHeight),
            "jumper_height" | "jumper-height" | "jumper" => Some(Self::JumperHeight),
            "unstretched_length" | "unstretched-length" | "length" | "cord" => {
                Some(Self::UnstretchedLength)
            }
            _ => None,
        }
    }

    /// Index into [`InputField::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for InputField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Self::Mass => "mass",
            Self::StartHeight => "starting height",
            Self::JumperHeight => "jumper height",
            Self::UnstretchedLength => "unstretched length",
        };
        f.write_str(text)
    }
}

/// Unparsed field text, exactly as entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInputs<'a> {
    /// Mass text
    pub mass: &'a str,
    /// Starting height text
    pub start_height: &'a str,
    /// Jumper height text
    pub jumper_height: &'a str,
    /// Unstretched cord length text
    pub unstretched_length: &'a str,
}

impl<'a> RawInputs<'a> {
    /// Bundle four field texts
    pub const fn new(
        mass: &'a str,
        start_height: &'a str,
        jumper_height: &'a str,
        unstretched_length: &'a str,
    ) -> Self {
        Self {
            mass,
            start_height,
            jumper_height,
            unstretched_length,
        }
    }

    /// Text for a given field
    pub const fn get(&self, field: InputField) -> &'a str {
        match field {
            InputField::Mass => self.mass,
            InputField::StartHeight => self.start_height,
            InputField::JumperHeight => self.jumper_height,
            InputField::UnstretchedLength => self.unstretched_length,
        }
    }

    /// Parse and validate every field, in form order
    ///
    /// The first failing field is reported.
    pub fn parse(&self) -> ValidationResult<JumpInputs> {
        let validator = TextQuantityValidator::default();
        let mut values = [0.0f64; 4];
        for field in InputField::ALL {
            values[field.index()] = validator.validate(self.get(field), field)?;
        }
        Ok(JumpInputs {
            mass: values[0],
            start_height: values[1],
            jumper_height: values[2],
            unstretched_length: values[3],
        })
    }
}

/// Validated measurements: every value finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JumpInputs {
    mass: f64,
    start_height: f64,
    jumper_height: f64,
    unstretched_length: f64,
}

impl JumpInputs {
    /// Validate four numeric measurements
    pub fn new(
        mass: f64,
        start_height: f64,
        jumper_height: f64,
        unstretched_length: f64,
    ) -> ValidationResult<Self> {
        let validator = PositiveQuantityValidator;
        Ok(Self {
            mass: validator.validate(&mass, InputField::Mass)?,
            start_height: validator.validate(&start_height, InputField::StartHeight)?,
            jumper_height: validator.validate(&jumper_height, InputField::JumperHeight)?,
            unstretched_length: validator
                .validate(&unstretched_length, InputField::UnstretchedLength)?,
        })
    }

    /// Jumper mass (kg)
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    /// Platform height above the ground (m)
    pub const fn start_height(&self) -> f64 {
        self.start_height
    }

    /// Jumper standing height (m)
    pub const fn jumper_height(&self) -> f64 {
        self.jumper_height
    }

    /// Cord resting length (m)
    pub const fn unstretched_length(&self) -> f64 {
        self.unstretched_length
    }

    /// Value for a given field
    pub const fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::Mass => self.mass,
            InputField::StartHeight => self.start_height,
            InputField::JumperHeight => self.jumper_height,
            InputField::UnstretchedLength => self.unstretched_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{InvalidReason, ValidationError};

    #[test]
    fn parses_example_values() {
        let inputs = RawInputs::new("70", "50", "1.7", "0.35").parse().unwrap();
        assert_eq!(inputs.mass(), 70.0);
        assert_eq!(inputs.start_height(), 50.0);
        assert_eq!(inputs.jumper_height(), 1.7);
        assert_eq!(inputs.unstretched_length(), 0.35);
    }

    #[test]
    fn reports_first_bad_field() {
        let result = RawInputs::new("70", "", "abc", "0.35").parse();
        assert_eq!(
            result,
            Err(ValidationError::invalid(InputField::StartHeight, InvalidReason::Missing))
        );
    }

    #[test]
    fn numeric_constructor_rejects_zero_and_negative() {
        assert_eq!(
            JumpInputs::new(0.0, 50.0, 1.7, 0.35),
            Err(ValidationError::invalid(InputField::Mass, InvalidReason::NotPositive))
        );
        assert_eq!(
            JumpInputs::new(70.0, 50.0, 1.7, -0.35),
            Err(ValidationError::invalid(
                InputField::UnstretchedLength,
                InvalidReason::NotPositive
            ))
        );
        assert_eq!(
            JumpInputs::new(70.0, f64::INFINITY, 1.7, 0.35),
            Err(ValidationError::invalid(InputField::StartHeight, InvalidReason::NotFinite))
        );
    }

    #[test]
    fn field_names_round_trip() {
        for field in InputField::ALL {
            assert_eq!(InputField::from_name(field.name()), Some(field));
        }
        assert_eq!(InputField::from_name("cord"), Some(InputField::UnstretchedLength));
        assert_eq!(InputField::from_name("weight"), None);
    }

    #[test]
    fn examples_parse() {
        let raw = RawInputs::new(
            InputField::Mass.example(),
            InputField::StartHeight.example(),
            InputField::JumperHeight.example(),
            InputField::UnstretchedLength.example(),
        );
        assert!(raw.parse().is_ok());
    }
}
