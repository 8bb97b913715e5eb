//! Calculator configuration
//!
//! [`JumpConstants`] bundles every constant the formulas consume. The engine
//! takes one at construction and never reads the `constants` module
//! directly, so tests and front ends can substitute their own values.
//!
//! With the `serde` feature the struct loads from JSON; missing keys fall
//! back to the defaults:
//!
//! ```json
//! { "spring_constant": 6.0, "ending_height": 0.25 }
//! ```

use crate::constants::{
    BUFFER_M, ENDING_HEIGHT_M, GRAVITY_M_PER_S2, NO_GO_ZONE_M, OPTIMAL_BAND_MAX_M,
    OPTIMAL_BAND_MIN_M, OPTIMAL_ENDING_HEIGHT_M, SPRING_CONSTANT_N_PER_M,
};
use crate::errors::ConfigError;
use crate::traits::Validatable;

/// Immutable set of physical constants used by the engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JumpConstants {
    /// Cord stiffness `k` (N/m)
    pub spring_constant: f64,

    /// Gravitational acceleration (m/s²)
    pub gravity: f64,

    /// Target clearance above the ground at the lowest point (m)
    pub ending_height: f64,

    /// Clearance the jumper must never go below (m); carried, not used
    pub no_go_zone: f64,

    /// Margin above the no-go zone (m); carried, not used
    pub buffer: f64,

    /// Ideal ending height the optimality distance is measured from (m)
    pub optimal_ending_height: f64,

    /// Inclusive lower edge of the optimal band (m)
    pub optimal_band_min: f64,

    /// Inclusive upper edge of the optimal band (m)
    pub optimal_band_max: f64,
}

impl Default for JumpConstants {
    fn default() -> Self {
        Self {
            spring_constant: SPRING_CONSTANT_N_PER_M,
            gravity: GRAVITY_M_PER_S2,
            ending_height: ENDING_HEIGHT_M,
            no_go_zone: NO_GO_ZONE_M,
            buffer: BUFFER_M,
            optimal_ending_height: OPTIMAL_ENDING_HEIGHT_M,
            optimal_band_min: OPTIMAL_BAND_MIN_M,
            optimal_band_max: OPTIMAL_BAND_MAX_M,
        }
    }
}

impl JumpConstants {
    /// Replace the spring constant
    pub fn with_spring_constant(mut self, spring_constant: f64) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    /// Replace gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Replace the target ending height
    pub fn with_ending_height(mut self, ending_height: f64) -> Self {
        self.ending_height = ending_height;
        self
    }

    /// Replace the no-go zone and buffer
    pub fn with_clearances(mut self, no_go_zone: f64, buffer: f64) -> Self {
        self.no_go_zone = no_go_zone;
        self.buffer = buffer;
        self
    }

    /// Replace the optimality target and its band
    pub fn with_optimal_band(mut self, target: f64, min: f64, max: f64) -> Self {
        self.optimal_ending_height = target;
        self.optimal_band_min = min;
        self.optimal_band_max = max;
        self
    }

    /// Check the constants make the formulas meaningful
    ///
    /// Stiffness and gravity must be finite and positive; heights and
    /// clearances finite and non-negative; the optimal band non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("spring_constant", self.spring_constant)?;
        check_positive("gravity", self.gravity)?;
        check_non_negative("ending_height", self.ending_height)?;
        check_non_negative("no_go_zone", self.no_go_zone)?;
        check_non_negative("buffer", self.buffer)?;
        check_non_negative("optimal_ending_height", self.optimal_ending_height)?;
        check_non_negative("optimal_band_min", self.optimal_band_min)?;
        check_non_negative("optimal_band_max", self.optimal_band_max)?;

        if self.optimal_band_min > self.optimal_band_max {
            return Err(ConfigError::InvalidBand {
                min: self.optimal_band_min,
                max: self.optimal_band_max,
            });
        }

        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_valid() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_valid() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant { name, value })
    }
}
