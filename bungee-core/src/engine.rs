//! Calculation Engine
//!
//! ## Energy Balance
//!
//! The jumper starts at rest on the platform and ends, momentarily at rest,
//! at the lowest point. Ignoring losses, energy at the top equals energy at
//! the bottom:
//!
//! ```text
//! m·g·h0 = m·g·h_end + ½·k·x²
//! ```
//!
//! Solving for the cord extension `x` gives the stretch distance. The cord
//! then has to be long enough that its unstretched length, the added length,
//! the stretch and the jumper's own height fill the drop down to `h_end`:
//!
//! ```text
//! added = h0 - x - L - h_end - h_jumper
//! ```
//!
//! ## Steps
//!
//! 1. `total_energy      = m · h0 · g`
//! 2. `ending_gpe        = h_end · m · g`
//! 3. `ending_elastic_pe = total_energy - ending_gpe`
//! 4. `stretch_distance  = sqrt(2 · ending_elastic_pe / k)`
//! 5. `string_added      = h0 - stretch - L - h_end - h_jumper`
//! 6. distance from optimal and 7. optimal flag, per [`OptimalityMode`]
//!
//! If the start height is below `h_end` the elastic energy in step 3 is
//! negative and step 4 has no real solution. The engine returns
//! [`ValidationError::NumericDomainError`] rather than a NaN stretch.
//!
//! Inputs are only checked to be finite and positive, so their products can
//! still overflow. Every computed quantity is checked as it is produced and
//! the first one that is not finite is reported as
//! [`ValidationError::Overflow`].

use crate::{
    config::JumpConstants,
    errors::{ConfigError, ValidationError, ValidationResult},
    inputs::{JumpInputs, RawInputs},
    optimality::{self, OptimalityMode},
    result::JumpResult,
};

/// Stateless calculator bound to one set of constants
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculationEngine {
    constants: JumpConstants,
    mode: OptimalityMode,
}

impl CalculationEngine {
    /// Engine over the given constants, judging optimality literally
    pub fn new(constants: JumpConstants) -> Self {
        Self {
            constants,
            mode: OptimalityMode::Literal,
        }
    }

    /// Engine over constants that have passed [`JumpConstants::validate`]
    pub fn try_new(constants: JumpConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(Self::new(constants))
    }

    /// Switch which ending height the optimality check judges
    pub fn with_mode(mut self, mode: OptimalityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Constants in use
    pub fn constants(&self) -> &JumpConstants {
        &self.constants
    }

    /// Optimality interpretation in use
    pub fn mode(&self) -> OptimalityMode {
        self.mode
    }

    /// Run the calculation on validated inputs
    pub fn compute(&self, inputs: &JumpInputs) -> ValidationResult<JumpResult> {
        let k = &self.constants;
        let mass = inputs.mass();
        let start_height = inputs.start_height();

        let total_energy = finite("total_energy", mass * start_height * k.gravity)?;
        let ending_gpe = finite("ending_gpe", k.ending_height * mass * k.gravity)?;
        let ending_elastic_pe = finite("ending_elastic_pe", total_energy - ending_gpe)?;

        let operand = (2.0 * ending_elastic_pe) / k.spring_constant;
        if operand < 0.0 {
            log_warn!(
                "Stretch distance undefined: start height {} m below ending height {} m",
                start_height,
                k.ending_height
            );
            return Err(ValidationError::NumericDomainError { operand });
        }
        let stretch_distance = finite("stretch_distance", libm::sqrt(operand))?;

        let string_added = finite(
            "string_added",
            start_height
                - stretch_distance
                - inputs.unstretched_length()
                - k.ending_height
                - inputs.jumper_height(),
        )?;

        let outcome = match self.mode {
            OptimalityMode::Literal => optimality::literal(k),
            OptimalityMode::AsBuilt => {
                optimality::as_built(k, inputs, stretch_distance, string_added)
            }
        };
        finite("ending_height", outcome.ending_height)?;
        finite("distance_from_optimal", outcome.distance_from_optimal)?;

        log_debug!(
            "Computed jump: E={} J, stretch={} m, added={} m, optimal={}",
            total_energy,
            stretch_distance,
            string_added,
            outcome.is_optimal
        );

        Ok(JumpResult {
            total_energy,
            ending_gpe,
            ending_elastic_pe,
            stretch_distance,
            string_added,
            ending_height: outcome.ending_height,
            distance_from_optimal: outcome.distance_from_optimal,
            is_optimal: outcome.is_optimal,
        })
    }

    /// Parse and validate field text, then calculate
    pub fn compute_raw(&self, inputs: &RawInputs<'_>) -> ValidationResult<JumpResult> {
        let validated = inputs.parse().map_err(|e| {
            log_debug!("Rejected input: {}", e);
            e
        })?;
        self.compute(&validated)
    }

    /// Validate four numbers, then calculate
    pub fn compute_values(
        &self,
        mass: f64,
        start_height: f64,
        jumper_height: f64,
        unstretched_length: f64,
    ) -> ValidationResult<JumpResult> {
        let inputs = JumpInputs::new(mass, start_height, jumper_height, unstretched_length)?;
        self.compute(&inputs)
    }
}

/// Pass a computed quantity through, or report which one overflowed
fn finite(quantity: &'static str, value: f64) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log_warn!("Computed {} is not finite: {}", quantity, value);
        Err(ValidationError::Overflow { quantity })
    }
}
