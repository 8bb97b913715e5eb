//! Form session state
//!
//! A [`CalculatorSession`] is what a front end drives: four text fields, a
//! calculate action and a reset action. State changes only on those calls:
//!
//! ```text
//!            calculate (ok)            reset
//!   Empty ──────────────────▶ Computed ───────▶ Empty
//!     │                          │
//!     │ calculate (err)          │ calculate (err)
//!     ▼                          ▼
//!   Error ◀──────────────────────┘
//!     │ acknowledge / reset
//!     ▼
//!   Empty
//! ```
//!
//! A failed calculation always drops the previous result, so an error is
//! never shown next to a stale result.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::{
    engine::CalculationEngine,
    errors::{ValidationError, ValidationResult},
    inputs::{InputField, RawInputs},
    result::JumpResult,
};

/// What the session currently shows
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SessionState {
    /// No result and no error
    #[default]
    Empty,
    /// Last calculation succeeded
    Computed(JumpResult),
    /// Last calculation failed
    Error(ValidationError),
}

/// One interactive calculator form
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    engine: CalculationEngine,
    fields: [String; 4],
    state: SessionState,
}

impl CalculatorSession {
    /// Empty session over the given engine
    pub fn new(engine: CalculationEngine) -> Self {
        Self {
            engine,
            fields: Default::default(),
            state: SessionState::Empty,
        }
    }

    /// Engine backing this session
    pub fn engine(&self) -> &CalculationEngine {
        &self.engine
    }

    /// Replace the text of one field; the current state is kept
    pub fn set_field(&mut self, field: InputField, text: &str) {
        let slot = &mut self.fields[field.index()];
        slot.clear();
        slot.push_str(text);
    }

    /// Current text of one field
    pub fn field(&self, field: InputField) -> &str {
        &self.fields[field.index()]
    }

    /// Borrow the field texts as raw inputs
    pub fn raw_inputs(&self) -> RawInputs<'_> {
        RawInputs::new(
            &self.fields[InputField::Mass.index()],
            &self.fields[InputField::StartHeight.index()],
            &self.fields[InputField::JumperHeight.index()],
            &self.fields[InputField::UnstretchedLength.index()],
        )
    }

    /// Validate the fields and calculate
    ///
    /// On success the state becomes `Computed`; on failure it becomes `Error`
    /// and any previous result is discarded.
    pub fn calculate(&mut self) -> ValidationResult<JumpResult> {
        let outcome = self.engine.compute_raw(&self.raw_inputs());
        self.state = match outcome {
            Ok(result) => SessionState::Computed(result),
            Err(err) => {
                log_debug!("Session calculation failed: {}", err);
                SessionState::Error(err)
            }
        };
        outcome
    }

    /// Clear every field and the result
    pub fn reset(&mut self) {
        for slot in &mut self.fields {
            slot.clear();
        }
        self.state = SessionState::Empty;
    }

    /// Dismiss a shown error, keeping the field texts for correction
    pub fn acknowledge(&mut self) {
        if matches!(self.state, SessionState::Error(_)) {
            self.state = SessionState::Empty;
        }
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Result on display, if any
    pub fn result(&self) -> Option<&JumpResult> {
        match &self.state {
            SessionState::Computed(result) => Some(result),
            _ => None,
        }
    }

    /// Error on display, if any
    pub fn error(&self) -> Option<&ValidationError> {
        match &self.state {
            SessionState::Error(err) => Some(err),
            _ => None,
        }
    }
}
